//! One module per subcommand.

pub mod bundle;
pub mod completions;
pub mod config;
