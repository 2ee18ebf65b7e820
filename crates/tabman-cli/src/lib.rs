//! Library side of the `tabman` binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
