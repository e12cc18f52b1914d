//! Document validation through lopdf
//! Author: kartik4091

use lopdf::Document;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::Validity;

/// Opens `path` as a PDF and classifies it.
///
/// Parse failures and page-less documents come back as
/// [`Validity::Corrupt`]. Failures that say nothing about the document
/// itself (file missing, permission denied) are returned as errors.
#[instrument]
pub fn validate(path: &Path) -> Result<Validity> {
    let pages = match Document::load(path) {
        Ok(document) => document.get_pages().len(),
        Err(lopdf::Error::IO(e)) if is_truncation(&e) => {
            debug!("Truncated document: {}", e);
            return Ok(Validity::Corrupt(e.to_string()));
        }
        Err(lopdf::Error::IO(e)) => return Err(Error::io(path, e)),
        Err(e) => {
            debug!("Parse failure: {}", e);
            return Ok(Validity::Corrupt(e.to_string()));
        }
    };

    if pages == 0 {
        debug!("Document has no pages");
        return Ok(Validity::Corrupt(format!(
            "'{}' is corrupt or invalid: No pages",
            path.display()
        )));
    }

    debug!("Document has {} page(s)", pages);
    Ok(Validity::Valid { pages })
}

/// Boolean form of [`validate`]
pub fn is_valid(path: &Path) -> Result<bool> {
    validate(path).map(|validity| validity.is_valid())
}

fn is_truncation(e: &std::io::Error) -> bool {
    matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::InvalidData)
}
