//! # boardlist
//!
//! Board list feature for the task-board client: fetches the user's boards
//! over REST, keeps them in an explicitly owned store driven by pure
//! reducers, and renders the list with per-row hover affordances.
//!
//! `net` holds the wire types and the HTTP seam, `state` the reducers and
//! the store, `components` the board list view built on top of both.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
