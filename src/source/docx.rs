//! `.docx` reader: paragraph text in document order.
//!
//! Parsing is done by `docx-rs`; this module walks its tree:
//!
//! ```text
//! Document
//!   ├── Paragraph ── Run ── Text | Tab | Break
//!   └── Table ── Row ── Cell ── Paragraph | Table
//! ```
//!
//! Drawings (text boxes, shapes) are not descended into, so their content is
//! never emitted, let alone twice.

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent};
use std::io::Cursor;
use std::path::Path;

/// Archive member holding the main document body
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Document reading errors.
#[derive(Debug)]
pub enum DocumentError {
    IoError(String, String),
    ArchiveError(String, String),
    MissingPart(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            DocumentError::ArchiveError(path, err) => write!(f, "Not a valid docx archive {}: {}", path, err),
            DocumentError::MissingPart(path) => write!(f, "{} has no {}", path, DOCUMENT_PART),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Read every paragraph of a `.docx` file, in document order.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|e| DocumentError::IoError(display.clone(), e.to_string()))?;

    // Checked up front so a zip without a body is told apart from a broken one.
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice()))
        .map_err(|e| DocumentError::ArchiveError(display.clone(), e.to_string()))?;
    if archive.by_name(DOCUMENT_PART).is_err() {
        return Err(DocumentError::MissingPart(display));
    }

    let docx = docx_rs::read_docx(&bytes).map_err(|e| DocumentError::ArchiveError(display.clone(), e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => paragraphs.push(paragraph_text(para)),
            DocumentChild::Table(table) => collect_table(table, &mut paragraphs),
            _ => {}
        }
    }
    Ok(paragraphs)
}

/// Cell paragraphs row by row, left to right; nested tables inline.
fn collect_table(table: &Table, out: &mut Vec<String>) {
    for row in &table.rows {
        let docx_rs::TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => out.push(paragraph_text(para)),
                    TableCellContent::Table(inner) => collect_table(inner, out),
                    _ => {}
                }
            }
        }
    }
}

/// Concatenate the runs of a paragraph, hyperlinked runs included.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&para.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
