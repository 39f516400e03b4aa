//! Client-side state: slice reducers and the store that owns them.
//!
//! DESIGN
//! ======
//! Each slice (`boards`, `ui`) exposes a pure `reduce` over the shared
//! `Action` union and ignores actions addressed to other slices. `Store`
//! is constructed by the entry point and handed to consumers explicitly.

pub mod boards;
pub mod store;
pub mod ui;
