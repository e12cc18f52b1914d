//! Filesystem predicates
//! Author: kartik4091

use std::path::Path;

/// True when `path` is an existing regular file; directories do not count
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}
