//! Falling-block puzzle simulation core with a terminal front-end.
//!
//! The `core` module holds the board simulation (grid, validation,
//! locking, line clearing, spawning); `controller` maps the five discrete
//! player actions onto it; `events` carries the board's notification
//! contract; `term` and `input` are the terminal host layer.

pub mod controller;
pub mod core;
pub mod events;
pub mod geometry;
pub mod input;
pub mod term;
pub mod types;
