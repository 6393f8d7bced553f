//! Document source adapter.
//!
//! The source is a directory holding one Word document per topical group.
//! Documents are enumerated by file name, classified into a group from
//! keywords in that name, and read into ordered paragraphs.

pub mod discovery;
pub mod docx;

pub use discovery::{classify_group, list_source_files, load_documents, LoadedDocuments, SourceDocument, SourceFile};
pub use docx::{read_paragraphs, DocumentError};
