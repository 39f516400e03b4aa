//! Board list view: heading, create affordance, and one row per board.
//!
//! The view owns no board data. It triggers the fetch once on mount,
//! forwards pointer events to the store as hover actions, and renders
//! whatever the store holds at the time of the call.

#[cfg(test)]
#[path = "board_list_test.rs"]
mod board_list_test;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::BoardsApi;
use crate::state::boards::fetch_all_boards;
use crate::state::store::{RootState, Store};
use crate::state::ui::UiAction;

pub const HEADING: &str = "My boards";
pub const CREATE_LABEL: &str = "Create new board";

/// Board list bound to a store.
pub struct BoardList {
    store: Store,
    mounted: AtomicBool,
}

impl BoardList {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store, mounted: AtomicBool::new(false) }
    }

    /// Fetch the board list on first mount. Returns `false` if already mounted.
    pub async fn mount<A>(&self, api: &A) -> bool
    where
        A: BoardsApi + ?Sized,
    {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }
        fetch_all_boards(api, &self.store).await;
        true
    }

    pub fn pointer_enter(&self, board_id: i64) {
        self.store.dispatch(UiAction::PointerEnter(board_id));
    }

    pub fn pointer_leave(&self, board_id: i64) {
        self.store.dispatch(UiAction::PointerLeave(board_id));
    }

    #[must_use]
    pub fn render(&self) -> RenderedBoardList {
        render(&self.store.state())
    }
}

/// A rendered board row. `fade` marks the hovered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: i64,
    pub name: String,
    pub fade: bool,
}

/// Snapshot of the board list as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedBoardList {
    pub heading: &'static str,
    pub create_label: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<RenderedRow>,
}

impl RenderedBoardList {
    /// Number of rows showing the hover indicator (0 or 1).
    #[must_use]
    pub fn fade_count(&self) -> usize {
        self.rows.iter().filter(|row| row.fade).count()
    }
}

impl fmt::Display for RenderedBoardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "+ {}", self.create_label)?;
        if self.loading {
            writeln!(f, "Loading boards...")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }
        for row in &self.rows {
            let marker = if row.fade { '>' } else { ' ' };
            writeln!(f, "{marker} {}", row.name)?;
        }
        Ok(())
    }
}

fn render(state: &RootState) -> RenderedBoardList {
    // Only the first row with the hovered id fades, even if ids repeat.
    let mut hovered = state.ui.hovered;
    let rows = state
        .boards
        .entities
        .iter()
        .map(|board| {
            let fade = hovered == Some(board.id);
            if fade {
                hovered = None;
            }
            RenderedRow { id: board.id, name: board.name.clone(), fade }
        })
        .collect();

    RenderedBoardList {
        heading: HEADING,
        create_label: CREATE_LABEL,
        loading: state.boards.fetch_loading,
        error: state.boards.fetch_error.clone(),
        rows,
    }
}
