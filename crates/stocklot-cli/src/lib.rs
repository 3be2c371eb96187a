//! Library components for the batch inventory CLI.

pub mod logging;
