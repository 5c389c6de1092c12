//! Command handlers, one per subcommand.

pub mod lifecycle;
pub mod prep;

pub use lifecycle::{handle_reset, handle_start, handle_stop};
pub use prep::handle_prep;
