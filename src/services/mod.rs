//! Process-level services used by the CLI.

pub mod tracing_setup;
