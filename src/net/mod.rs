//! Networking modules for the boards REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls behind the `BoardsApi` seam and `types` defines
//! the wire schema shared with the backend.

pub mod api;
pub mod types;
