#![allow(dead_code)]

use lopdf::{dictionary, Document, Object};
use pdfsweep::{Remover, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct TestFixtures;

impl TestFixtures {
    /// Builds a well-formed PDF with `pages` blank pages
    pub fn pdf_with_pages(pages: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..pages)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                })
                .into()
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    pub fn get_minimal_pdf() -> Vec<u8> {
        Self::pdf_with_pages(1)
    }

    pub fn get_pageless_pdf() -> Vec<u8> {
        Self::pdf_with_pages(0)
    }

    /// An empty but well-formed zip archive
    pub fn get_zip_archive() -> Vec<u8> {
        let mut bytes = b"PK\x05\x06".to_vec();
        bytes.extend_from_slice(&[0u8; 18]);
        bytes
    }

    pub fn get_malformed_pdf() -> Vec<u8> {
        b"This is not a valid PDF file".to_vec()
    }

    pub fn write(dir: &Path, relative: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

/// Remover that counts calls per path without touching the disk
#[derive(Debug, Default)]
pub struct CountingRemover {
    pub calls: Vec<PathBuf>,
}

impl CountingRemover {
    pub fn count(&self, path: &Path) -> usize {
        self.calls.iter().filter(|p| p.as_path() == path).count()
    }
}

impl Remover for CountingRemover {
    fn remove(&mut self, path: &Path) -> Result<()> {
        self.calls.push(path.to_path_buf());
        Ok(())
    }
}
