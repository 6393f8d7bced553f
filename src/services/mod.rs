//! Application services.
//!
//! Entry points the binary drives: the idempotent import run and the
//! parse-only preview.

pub mod ingest;
pub mod preview;

pub use ingest::{import_blocks, import_question, run_ingestion, ImportOutcome, ImportSummary, IngestError};
pub use preview::{build_preview, write_preview, Preview, PreviewEntry};
