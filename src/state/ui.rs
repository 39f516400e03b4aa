//! Hover state for board list rows.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::store::Action;

/// Hover state for the board list. At most one row is hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: Option<i64>,
}

/// Pointer events forwarded from board list rows, keyed by board id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    PointerEnter(i64),
    PointerLeave(i64),
}

#[must_use]
pub fn reduce(state: &HoverState, action: &Action) -> HoverState {
    match action {
        Action::Ui(UiAction::PointerEnter(id)) => HoverState { hovered: Some(*id) },
        // A late leave from a row that lost hover must not clear the new one.
        Action::Ui(UiAction::PointerLeave(id)) if state.hovered == Some(*id) => HoverState { hovered: None },
        _ => *state,
    }
}
