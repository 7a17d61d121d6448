pub mod config;
pub mod repl;

pub use config::*;
pub use repl::*;
