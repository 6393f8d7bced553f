//! Dry-run preview: parse the source directory and dump what would be stored.

use serde::Serialize;
use std::path::Path;

use crate::config::{get_group_name, IngestConfig};
use crate::domain::OptionDraft;
use crate::parser::{parse_document, resolve_answer};
use crate::source::load_documents;

use super::ingest::IngestError;

/// One parsed block as shown in the preview file
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    pub file: String,
    pub ordinal: usize,
    pub level: u32,
    pub group_id: Option<i64>,
    pub group_name: Option<String>,
    pub question: Option<String>,
    pub options: Vec<OptionDraft>,
    pub correct_letter: Option<char>,
    pub answer_statement: String,
    pub explanation: String,
    /// False when the importer would drop this block
    pub importable: bool,
}

/// Preview file layout
#[derive(Debug, Serialize)]
pub struct Preview {
    /// Documents skipped because they could not be read
    pub unreadable_documents: usize,
    pub total_blocks: usize,
    pub importable_blocks: usize,
    pub entries: Vec<PreviewEntry>,
}

pub fn build_preview(config: &IngestConfig) -> Preview {
    let mut entries = Vec::new();
    let loaded = load_documents(&config.source_dir, &config.extension);

    for document in &loaded.documents {
        for block in parse_document(&document.paragraphs, document.file.group_id) {
            let resolved = resolve_answer(block.answer_text.as_deref());
            let draft = block.resolve();
            entries.push(PreviewEntry {
                file: document.file.file_name.clone(),
                ordinal: block.ordinal,
                level: block.level,
                group_id: block.group_id,
                group_name: block.group_id.map(get_group_name),
                question: block.question_text.clone(),
                options: crate::parser::mark_correct(&block.option_texts, resolved.correct_letter),
                correct_letter: resolved.correct_letter,
                answer_statement: resolved.answer_statement,
                explanation: resolved.explanation,
                importable: draft.is_some(),
            });
        }
    }

    Preview {
        unreadable_documents: loaded.unreadable,
        total_blocks: entries.len(),
        importable_blocks: entries.iter().filter(|e| e.importable).count(),
        entries,
    }
}

/// Write the preview as pretty-printed JSON, creating parent directories.
pub fn write_preview(preview: &Preview, path: &Path) -> Result<(), IngestError> {
    let json = serde_json::to_string_pretty(preview).map_err(|e| IngestError::Serialize(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| IngestError::Io(parent.display().to_string(), e.to_string()))?;
    }
    std::fs::write(path, json).map_err(|e| IngestError::Io(path.display().to_string(), e.to_string()))?;

    tracing::info!(
        "Wrote preview of {} block(s) ({} importable) to {}",
        preview.total_blocks,
        preview.importable_blocks,
        path.display()
    );
    Ok(())
}
