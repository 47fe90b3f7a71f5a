//! Rules File Reader
//!
//! One rule per line; blank lines and `#` comments are ignored.

use std::path::Path;

use super::error::{SourceError, SourceResult};

/// Read the active rules, in file order
pub async fn read_rules(path: &Path) -> SourceResult<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::from_io(path, e))?;

    Ok(parse_rules(&content))
}

/// Extract rules from the text of a rules file
pub fn parse_rules(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules() {
        let content = r#"# generated rules
alert tcp any any -> any any (msg:"test"; sid:1;)

   drop ip 10.0.0.9 any -> any any (msg:"Detected port scanning activity from 10.0.0.9"; sid:2000001; rev:1;)
# disabled: alert udp any any -> any 53
"#;
        let rules = parse_rules(content);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], r#"alert tcp any any -> any any (msg:"test"; sid:1;)"#);
        assert!(rules[1].starts_with("drop ip 10.0.0.9"));
    }

    #[test]
    fn test_parse_rules_empty() {
        assert!(parse_rules("").is_empty());
        assert!(parse_rules("# only comments\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_read_rules_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rules(&dir.path().join("sml.rules")).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }
}
