//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* state and turns it into cells on the
//! terminal.  No interaction logic happens here.

pub mod layout;
pub mod page;
pub mod reel;
pub mod theme;
