//! Level/block scanner.
//!
//! A two-state machine over the normalized lines of one document:
//!
//! ```text
//! SeekingMarker --situation--> InsideBlock
//! InsideBlock   --situation--> InsideBlock   (previous block emitted)
//! InsideBlock   --level------> SeekingMarker (previous block emitted)
//! SeekingMarker --level------> SeekingMarker (level updated)
//! ```
//!
//! Text seen while seeking (file preamble) is discarded. No state survives
//! between calls.

use serde::Serialize;

use super::markers::{LineKind, MARKERS};
use crate::config::DEFAULT_LEVEL;

/// Lines belonging to one situation, from its marker up to the next marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawBlock {
    /// Level in effect when the situation marker was seen
    pub level: u32,
    /// Group of the document the block came from
    pub group_id: Option<i64>,
    /// 1-based position of the block within its document
    pub ordinal: usize,
    pub lines: Vec<String>,
}

enum ScanState {
    SeekingMarker,
    InsideBlock(Vec<String>),
}

struct Scanner {
    group_id: Option<i64>,
    current_level: u32,
    blocks: Vec<RawBlock>,
}

impl Scanner {
    fn new(group_id: Option<i64>) -> Self {
        Self {
            group_id,
            current_level: DEFAULT_LEVEL,
            blocks: Vec::new(),
        }
    }

    fn step(&mut self, state: ScanState, line: &str) -> ScanState {
        match (state, MARKERS.classify(line)) {
            (ScanState::SeekingMarker, LineKind::Level(level)) => {
                self.current_level = level;
                ScanState::SeekingMarker
            }
            (ScanState::SeekingMarker, LineKind::Situation) => ScanState::InsideBlock(vec![line.to_string()]),
            (ScanState::SeekingMarker, LineKind::Text) => ScanState::SeekingMarker,
            (ScanState::InsideBlock(lines), LineKind::Level(level)) => {
                self.emit(lines);
                self.current_level = level;
                ScanState::SeekingMarker
            }
            (ScanState::InsideBlock(lines), LineKind::Situation) => {
                self.emit(lines);
                ScanState::InsideBlock(vec![line.to_string()])
            }
            (ScanState::InsideBlock(mut lines), LineKind::Text) => {
                lines.push(line.to_string());
                ScanState::InsideBlock(lines)
            }
        }
    }

    fn emit(&mut self, lines: Vec<String>) {
        self.blocks.push(RawBlock {
            level: self.current_level,
            group_id: self.group_id,
            ordinal: self.blocks.len() + 1,
            lines,
        });
    }

    fn finish(mut self, state: ScanState) -> Vec<RawBlock> {
        if let ScanState::InsideBlock(lines) = state {
            self.emit(lines);
        }
        self.blocks
    }
}

/// Split a document's lines into raw blocks, tagging each with its level.
pub fn scan_blocks<S: AsRef<str>>(lines: &[S], group_id: Option<i64>) -> Vec<RawBlock> {
    let mut scanner = Scanner::new(group_id);
    let mut state = ScanState::SeekingMarker;
    for line in lines {
        state = scanner.step(state, line.as_ref());
    }
    scanner.finish(state)
}
