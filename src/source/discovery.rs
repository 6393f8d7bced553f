//! Source discovery - enumerating documents and classifying them by group.

use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

use super::docx::{read_paragraphs, DocumentError};
use crate::config::GROUPS;

/// A document found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute or configured path to the file
    pub path: PathBuf,
    /// File name as found on disk
    pub file_name: String,
    /// Group resolved from the file name, if any keyword matched
    pub group_id: Option<i64>,
}

/// A document with its paragraphs loaded.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file: SourceFile,
    pub paragraphs: Vec<String>,
}

impl SourceFile {
    /// Load the paragraphs of this document.
    pub fn read(&self) -> Result<SourceDocument, DocumentError> {
        Ok(SourceDocument {
            file: self.clone(),
            paragraphs: read_paragraphs(&self.path)?,
        })
    }
}

/// Classify a document into a group from its file name.
///
/// Matching is case-insensitive but diacritic-sensitive; `-` and `_` count as
/// spaces. The first group in `GROUPS` whose keyword appears wins.
pub fn classify_group(file_name: &str) -> Option<i64> {
    let name: String = file_name
        .nfc()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    GROUPS
        .iter()
        .find(|g| name.contains(g.keyword))
        .map(|g| g.id)
}

/// List the documents in `dir` with the given extension, sorted by name.
///
/// A missing or unreadable directory yields an empty list. Office lock files
/// (`~$...`) are skipped.
pub fn list_source_files(dir: &Path, extension: &str) -> Vec<SourceFile> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::info!("No source documents at {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<SourceFile> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .filter_map(|path| {
            let file_name = path.file_name()?.to_string_lossy().into_owned();
            if file_name.starts_with("~$") {
                return None;
            }
            Some(SourceFile {
                group_id: classify_group(&file_name),
                file_name,
                path,
            })
        })
        .collect();

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    files
}

/// Documents read from a source directory.
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub documents: Vec<SourceDocument>,
    /// Files with the right extension that could not be read as docx
    pub unreadable: usize,
}

/// Load every readable document in `dir`; unreadable ones are logged, counted
/// and skipped.
pub fn load_documents(dir: &Path, extension: &str) -> LoadedDocuments {
    let files = list_source_files(dir, extension);
    tracing::info!("Found {} document(s) in {}", files.len(), dir.display());

    let mut loaded = LoadedDocuments::default();
    for file in &files {
        match file.read() {
            Ok(doc) => loaded.documents.push(doc),
            Err(e) => {
                tracing::warn!("Skipping unreadable document {}: {}", file.file_name, e);
                loaded.unreadable += 1;
            }
        }
    }
    loaded
}
