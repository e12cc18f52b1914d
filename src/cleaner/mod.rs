//! Cleaner Module
//! Author: kartik4091

pub mod remover;

pub use remover::{remove, DryRunRemover, FsRemover, Remover};
