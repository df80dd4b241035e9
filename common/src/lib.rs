//! Shared domain layer for the Sabha Manager.
//!
//! Everything in this crate compiles for both the browser (`wasm32`) and the
//! native backend, so it holds no I/O of its own: persistence goes through the
//! [`store::KeyValueStorage`] trait and time is always passed in by the caller.

pub mod error;
pub mod export;
pub mod forms;
pub mod model;
pub mod requests;
pub mod store;
pub mod views;
