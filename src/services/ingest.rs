//! Idempotent import of situation documents.
//!
//! Each run:
//! 1. Ensures the fixed groups exist (own transaction, committed first)
//! 2. Parses every document in the source directory
//! 3. Writes each document's new questions and options in one transaction
//!
//! A question whose (content, level, group) already exists is skipped, so a
//! run can be repeated safely. A storage failure aborts the run but keeps
//! every document committed before it.

use rusqlite::Connection;

use crate::config::IngestConfig;
use crate::db;
use crate::domain::QuestionDraft;
use crate::parser::{parse_document, ParsedBlock};
use crate::source::load_documents;

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub groups_created: usize,
    pub documents_read: usize,
    /// Documents whose file name matched no group keyword
    pub documents_unclassified: usize,
    /// Documents that could not be opened as docx
    pub documents_unreadable: usize,
    pub blocks_found: usize,
    /// Blocks without question text or group
    pub blocks_dropped: usize,
    pub questions_imported: usize,
    /// Questions already present under the same identity
    pub questions_skipped: usize,
    pub answers_imported: usize,
    /// Imported questions with no option flagged correct
    pub unresolved_answers: usize,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} questions imported, {} skipped as existing, {} blocks dropped \
             ({} documents read, {} unclassified, {} unreadable; {} answers, {} without a correct answer)",
            self.questions_imported,
            self.questions_skipped,
            self.blocks_dropped,
            self.documents_read,
            self.documents_unclassified,
            self.documents_unreadable,
            self.answers_imported,
            self.unresolved_answers,
        )
    }
}

/// Fatal ingestion errors.
#[derive(Debug)]
pub enum IngestError {
    Storage(rusqlite::Error),
    Io(String, String),
    Serialize(String),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Storage(e) => write!(f, "Database error: {}", e),
            IngestError::Io(path, err) => write!(f, "IO error at {}: {}", path, err),
            IngestError::Serialize(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl IngestError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            IngestError::Storage(_) => "Database unavailable or rejected the import",
            IngestError::Io(_, _) => "Failed to write output file",
            IngestError::Serialize(_) => "Failed to serialize output",
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for IngestError {
    fn from(e: rusqlite::Error) -> Self {
        IngestError::Storage(e)
    }
}

/// Outcome of importing one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported { question_id: i64, answers: usize },
    Skipped { existing_id: i64 },
}

/// Run ingestion for the configured source directory.
///
/// A missing directory is not an error: the run completes with nothing read.
pub fn run_ingestion(conn: &mut Connection, config: &IngestConfig) -> Result<ImportSummary, IngestError> {
    let mut summary = ImportSummary::default();

    ensure_groups(conn, &mut summary).inspect_err(|e| tracing::error!("Failed to ensure groups: {}", e))?;

    let loaded = load_documents(&config.source_dir, &config.extension);
    summary.documents_unreadable = loaded.unreadable;

    for document in &loaded.documents {
        let file = &document.file;
        summary.documents_read += 1;

        if file.group_id.is_none() {
            tracing::warn!("No group keyword in file name {}; its blocks will be dropped", file.file_name);
            summary.documents_unclassified += 1;
        }

        let blocks = parse_document(&document.paragraphs, file.group_id);
        import_blocks(conn, &file.file_name, &blocks, &mut summary)
            .inspect_err(|e| tracing::error!("Import of {} failed: {}", file.file_name, e))?;
    }

    tracing::info!("Ingestion finished: {}", summary);
    Ok(summary)
}

fn ensure_groups(conn: &mut Connection, summary: &mut ImportSummary) -> Result<(), IngestError> {
    let tx = conn.transaction()?;
    summary.groups_created += db::ensure_groups(&tx)?;
    tx.commit()?;
    Ok(())
}

/// Import the blocks of one document in a single transaction.
pub fn import_blocks(
    conn: &mut Connection,
    source: &str,
    blocks: &[ParsedBlock],
    summary: &mut ImportSummary,
) -> Result<(), IngestError> {
    let tx = conn.transaction()?;
    let before = summary.clone();

    for block in blocks {
        summary.blocks_found += 1;

        let Some(draft) = block.resolve() else {
            tracing::debug!(
                "Dropping block {} of {}: {}",
                block.ordinal,
                source,
                if block.group_id.is_none() { "no group" } else { "no question text" }
            );
            summary.blocks_dropped += 1;
            continue;
        };

        match import_question(&tx, &draft)? {
            ImportOutcome::Imported { answers, .. } => {
                summary.questions_imported += 1;
                summary.answers_imported += answers;
                if !draft.has_correct_option() {
                    tracing::warn!(
                        "Block {} of {} imported without a correct answer (letter {:?})",
                        block.ordinal,
                        source,
                        draft.correct_letter
                    );
                    summary.unresolved_answers += 1;
                }
            }
            ImportOutcome::Skipped { existing_id } => {
                tracing::debug!("Block {} of {} already stored as question {}", block.ordinal, source, existing_id);
                summary.questions_skipped += 1;
            }
        }
    }

    tx.commit()?;
    tracing::info!(
        "{}: {} imported, {} skipped, {} dropped",
        source,
        summary.questions_imported - before.questions_imported,
        summary.questions_skipped - before.questions_skipped,
        summary.blocks_dropped - before.blocks_dropped
    );
    Ok(())
}

/// Insert a question and its options unless its identity triple already exists.
pub fn import_question(conn: &Connection, draft: &QuestionDraft) -> rusqlite::Result<ImportOutcome> {
    if let Some(existing_id) = db::find_question_id(conn, &draft.content, draft.level, draft.group_id)? {
        return Ok(ImportOutcome::Skipped { existing_id });
    }

    let question_id = db::insert_question(conn, draft)?;
    for option in &draft.options {
        db::insert_answer(conn, question_id, option)?;
    }

    Ok(ImportOutcome::Imported {
        question_id,
        answers: draft.options.len(),
    })
}
