//! Root action union and the store that owns application state.
//!
//! DESIGN
//! ======
//! `Store` is a cloneable handle over one `RootState`. Every dispatched
//! action runs through each slice reducer and is appended to the action
//! log, which views and tests read back in dispatch order. The lock is
//! only taken inside synchronous methods, never across an `.await`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::boards::{self, BoardListState, BoardsAction};
use super::ui::{self, HoverState, UiAction};

/// Every action the store accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Boards(BoardsAction),
    Ui(UiAction),
}

impl Action {
    /// Stable type string, used for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boards(BoardsAction::Pending) => "boards/fetchAll/pending",
            Self::Boards(BoardsAction::Fulfilled(_)) => "boards/fetchAll/fulfilled",
            Self::Boards(BoardsAction::Rejected(_)) => "boards/fetchAll/rejected",
            Self::Ui(UiAction::PointerEnter(_)) => "ui/pointerEnter",
            Self::Ui(UiAction::PointerLeave(_)) => "ui/pointerLeave",
        }
    }
}

impl From<BoardsAction> for Action {
    fn from(action: BoardsAction) -> Self {
        Self::Boards(action)
    }
}

impl From<UiAction> for Action {
    fn from(action: UiAction) -> Self {
        Self::Ui(action)
    }
}

/// Combined state of all slices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootState {
    pub boards: BoardListState,
    pub ui: HoverState,
}

impl RootState {
    #[must_use]
    pub fn reduce(&self, action: &Action) -> Self {
        Self {
            boards: boards::reduce(&self.boards, action),
            ui: ui::reduce(&self.ui, action),
        }
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    state: RootState,
    log: Vec<Action>,
}

/// Shared handle to the application state.
#[derive(Clone, Debug, Default)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `state` instead of the initial state.
    #[must_use]
    pub fn with_state(state: RootState) -> Self {
        Self { inner: Arc::new(Mutex::new(StoreInner { state, log: Vec::new() })) }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::debug!(action = action.kind(), "dispatch");

        let mut inner = self.lock();
        inner.state = inner.state.reduce(&action);
        inner.log.push(action);
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> RootState {
        self.lock().state.clone()
    }

    /// Every action dispatched so far, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.lock().log.clone()
    }

    // State is only ever replaced whole, so a poisoned guard still holds a valid value.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
