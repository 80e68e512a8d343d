pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod render;
mod shell;
pub mod shell_context;
pub mod system_clock;
pub mod table;

pub use shell::{run_cli, SCRIPT_ENV_VAR};
