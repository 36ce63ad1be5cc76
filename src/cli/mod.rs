// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! Command-line interface: argument parsing, diagnostics, and the
//! prediction entry point.

pub mod args;
pub mod logging;
pub mod predict;
