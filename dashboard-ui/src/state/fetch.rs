//! Per-view Fetch State
//!
//! Each view issues one request when it mounts. The outcome lands in a
//! `FetchState` signal, unless the view was torn down first.

use leptos::*;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::api::FetchError;
use crate::console;

/// Outcome of a view's fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Flag cleared when the owning view unmounts
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// A guard released by the current reactive owner's cleanup
    pub fn scoped() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.release());
        guard
    }

    pub fn release(&self) {
        self.0.set(false);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Hand `value` to `apply` only while mounted. Returns whether it was applied.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_mounted() {
            apply(value);
            true
        } else {
            false
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `fetch` once for the mounting view and expose its outcome.
///
/// Failures are logged to the console as `❌ Error al cargar {what}`.
pub fn use_fetch<T, F, Fut>(what: &'static str, fetch: F) -> ReadSignal<FetchState<T>>
where
    T: Clone + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let (state, set_state) = create_signal(FetchState::Loading);
    let guard = MountGuard::scoped();

    spawn_local(async move {
        let result = fetch().await;
        if let Err(e) = &result {
            console::warn(&format!("❌ Error al cargar {}: {}", what, e));
        }

        if !guard.apply(FetchState::from(result), |outcome| set_state.set(outcome)) {
            console::debug(&format!("Discarded {} response after unmount", what));
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_result() {
        let state: FetchState<u32> = Ok(3).into();
        assert_eq!(state.loaded(), Some(&3));

        let state: FetchState<u32> = Err(FetchError::Network("offline".to_string())).into();
        assert_eq!(state.loaded(), None);
        assert!(matches!(state, FetchState::Failed(FetchError::Network(_))));
    }

    #[test]
    fn test_guard_applies_while_mounted() {
        let guard = MountGuard::new();
        let mut seen = None;

        assert!(guard.apply(7, |v| seen = Some(v)));
        assert_eq!(seen, Some(7));
    }

    #[test]
    fn test_scoped_guard_released_on_cleanup() {
        let runtime = create_runtime();

        let (guard, disposer) = as_child_of_current_owner(|_: ()| MountGuard::scoped())(());
        assert!(guard.is_mounted());

        drop(disposer);
        assert!(!guard.is_mounted());

        let mut seen = None;
        assert!(!guard.apply(7, |v| seen = Some(v)));
        assert_eq!(seen, None);

        runtime.dispose();
    }

    #[test]
    fn test_guard_discards_after_release() {
        let guard = MountGuard::new();
        let view_side = guard.clone();
        view_side.release();

        let mut seen = None;
        assert!(!guard.apply(7, |v| seen = Some(v)));
        assert_eq!(seen, None);
        assert!(!guard.is_mounted());
    }
}
