//! File name helpers
//! Author: kartik4091

use regex::Regex;
use std::path::Path;

/// Returns the last segment of `path`, file name and extension included.
///
/// Both `/` and `\` count as separators, whatever the host convention is,
/// and trailing separators are skipped.
pub fn basename(path: &str) -> String {
    path.split(['/', '\\'])
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Same as [`basename`] for a filesystem path
pub fn path_basename(path: &Path) -> String {
    basename(&path.to_string_lossy())
}

/// True when at least one character of `text` is an uppercase letter
pub fn has_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase)
}

/// Extension of the last segment, dot included; empty when there is none
fn extension(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or_default()
}

/// Turns a file name into a lowercase, filesystem-safe one: every run of
/// characters outside `[a-z0-9]` becomes a single `_`, `_pdf` fragments are
/// dropped and the original (lowercased) extension is put back.
pub struct NameSanitizer {
    non_alnum: Regex,
    underscores: Regex,
}

impl Default for NameSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSanitizer {
    pub fn new() -> Self {
        Self {
            non_alnum: Regex::new(r"[^a-z0-9]").unwrap(),
            underscores: Regex::new(r"_+").unwrap(),
        }
    }

    pub fn sanitize(&self, name: &str) -> String {
        let lower = basename(&name.to_lowercase());
        let ext = extension(&lower).to_string();

        let safe = self.non_alnum.replace_all(&lower, "_");
        let safe = self.underscores.replace_all(&safe, "_");
        let mut safe = safe.trim_matches('_').replace("_pdf", "");

        if extension(&safe) != ext {
            safe.push_str(&ext);
        }
        safe
    }
}
