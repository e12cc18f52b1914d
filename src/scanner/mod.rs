//! Scanner Module
//! Author: kartik4091
//!
//! Locates candidate files under a directory tree.

pub mod path_scanner;

pub use path_scanner::{scan, PathScanner};
