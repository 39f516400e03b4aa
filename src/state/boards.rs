//! Board list slice: fetched boards, fetch status, and the fetch action.
//!
//! A failed fetch only ever leaves [`FETCH_BOARDS_FAILED`] in state; the
//! transport error goes to the log.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use super::store::{Action, Store};
use crate::net::api::BoardsApi;
use crate::net::types::Board;

/// Message stored in state when a board fetch fails for any reason.
pub const FETCH_BOARDS_FAILED: &str = "Failed to fetch boards.";

/// Board list slice: fetched boards plus the status of the last fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardListState {
    pub entities: Vec<Board>,
    pub fetch_loading: bool,
    pub fetch_error: Option<String>,
}

/// Lifecycle of one `fetch_all_boards` call. `Pending` always comes first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardsAction {
    Pending,
    Fulfilled(Vec<Board>),
    Rejected(String),
}

/// Apply `action` to the board list slice. Non-board actions are identity.
#[must_use]
pub fn reduce(state: &BoardListState, action: &Action) -> BoardListState {
    let Action::Boards(action) = action else {
        return state.clone();
    };
    match action {
        BoardsAction::Pending => BoardListState { fetch_loading: true, fetch_error: None, ..state.clone() },
        BoardsAction::Fulfilled(boards) => BoardListState {
            entities: boards.clone(),
            fetch_loading: false,
            ..state.clone()
        },
        BoardsAction::Rejected(message) => BoardListState {
            fetch_loading: false,
            fetch_error: Some(message.clone()),
            ..state.clone()
        },
    }
}

/// Fetch all boards through `api`, dispatching the lifecycle into `store`.
///
/// The transport error is logged and replaced by [`FETCH_BOARDS_FAILED`].
pub async fn fetch_all_boards<A>(api: &A, store: &Store)
where
    A: BoardsApi + ?Sized,
{
    store.dispatch(BoardsAction::Pending);

    match api.fetch_boards().await {
        Ok(boards) => {
            tracing::info!(count = boards.len(), "boards fetched");
            store.dispatch(BoardsAction::Fulfilled(boards));
        }
        Err(e) => {
            tracing::warn!(error = %e, retryable = e.retryable(), "board fetch failed");
            store.dispatch(BoardsAction::Rejected(FETCH_BOARDS_FAILED.to_owned()));
        }
    }
}
