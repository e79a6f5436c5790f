//! Console output for game results and configuration diagnostics

pub mod console;
