//! # docslot core
//!
//! Domain types and the slot generator shared by the directory and view crates.
//!
//! The generator is a pure function of the current wall-clock moment and the
//! clinic's [`slots::BusinessHours`]. Nothing in this crate reads a clock,
//! touches the filesystem or holds mutable state.

pub mod errors;
pub mod models;
pub mod slots;
