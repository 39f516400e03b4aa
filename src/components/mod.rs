//! View components rendered from store snapshots.

pub mod board_list;
