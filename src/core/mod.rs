//! Core interaction logic — timelines, state machines, and scroll geometry.
//!
//! Nothing in this module depends on any TUI or rendering crate; everything
//! takes the current time and page geometry as parameters, so it is all
//! testable without a terminal.

pub mod anim;
pub mod caption;
pub mod fade;
pub mod navigator;
pub mod panel;
pub mod stage;
pub mod timing;
