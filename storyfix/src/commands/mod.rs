//! Commands module - CLI command implementations.

mod fix;
mod init;

pub use fix::{run_fix, FixOptions};
pub use init::{run_init, run_init_in};
