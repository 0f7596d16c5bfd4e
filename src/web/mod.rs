//! Web server module for the univers HTTP API.
//!
//! Thin transport glue around the query pipeline; gated by the `ui` feature.

mod server;

pub use server::{router, serve, AppState};
