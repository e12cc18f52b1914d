//! Utility Module Implementation
//! Author: kartik4091
//!
//! Small filesystem and file-name helpers used by the sweep stages.

pub mod fs;
pub mod naming;

pub use self::{
    fs::exists,
    naming::{basename, has_uppercase, path_basename, NameSanitizer},
};
