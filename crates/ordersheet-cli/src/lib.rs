//! Library components for the order sheet CLI.

pub mod logging;
