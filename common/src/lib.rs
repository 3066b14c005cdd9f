//! Shared model and client-side logic for the training management console.
//!
//! Everything in this crate is plain Rust with no browser dependency, so the
//! frontend (Yew, compiled to wasm) and the console host (actix) agree on the
//! wire shapes, and the screen state machine and spreadsheet import can be
//! tested on the host.

pub mod dashboard;
pub mod import;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod screen;
