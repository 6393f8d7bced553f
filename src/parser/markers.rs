//! Marker vocabulary recognised in situation documents.
//!
//! Every cue the scanner, segmenter and resolver react to lives in the single
//! [`MARKERS`] table so each transition guard can be tested on its own.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled marker patterns.
pub struct MarkerSet {
    /// `Level 2`, `LEVEL: 3` - declares the difficulty for following blocks
    pub level: Regex,
    /// `Tình huống 1: ...` - opens a new block
    pub situation: Regex,
    /// `A. ...`, `B) ...` - starts an answer option
    pub option: Regex,
    /// `Đáp án ...` / `Đáp án đúng ...` at the start of a line
    pub answer: Regex,
    /// Answer keyword followed by the correct letter
    pub answer_letter: Regex,
    /// `Giải thích chuyên gia:` - starts the expert explanation
    pub explanation: Regex,
}

/// Literal form of the explanation keyword, used when rendering content.
pub const EXPLANATION_KEYWORD: &str = "Giải thích chuyên gia:";

pub static MARKERS: LazyLock<MarkerSet> = LazyLock::new(|| MarkerSet {
    level: Regex::new(r"(?i)^level\s*[:.]?\s*(\d+)\b").expect("valid level regex"),
    situation: Regex::new(r"(?i)^tình\s+huống").expect("valid situation regex"),
    option: Regex::new(r"^[A-E][.)]\s").expect("valid option regex"),
    answer: Regex::new(r"(?i)^đáp\s+án").expect("valid answer regex"),
    answer_letter: Regex::new(r"(?i:đáp\s+án(?:\s+đúng)?(?:\s+là)?)\s*[:：]?\s*([A-D])\b")
        .expect("valid answer letter regex"),
    explanation: Regex::new(r"(?i)giải\s+thích\s+chuyên\s+gia\s*:").expect("valid explanation regex"),
});

/// Classification of a single normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Level marker carrying the parsed level
    Level(u32),
    /// Situation marker
    Situation,
    /// Anything else
    Text,
}

impl MarkerSet {
    /// Parse a level marker. Lines whose number does not fit are plain text.
    pub fn level_of(&self, line: &str) -> Option<u32> {
        self.level
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    pub fn is_situation(&self, line: &str) -> bool {
        self.situation.is_match(line)
    }

    pub fn is_option_start(&self, line: &str) -> bool {
        self.option.is_match(line)
    }

    pub fn is_answer(&self, line: &str) -> bool {
        self.answer.is_match(line)
    }

    /// Correct letter named after the answer keyword anywhere in `text`.
    pub fn answer_letter(&self, text: &str) -> Option<char> {
        self.answer_letter
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
    }

    /// Byte offset where the expert explanation starts, if present.
    pub fn explanation_start(&self, text: &str) -> Option<usize> {
        self.explanation.find(text).map(|m| m.start())
    }

    /// Level markers win over situation markers when both could match.
    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(level) = self.level_of(line) {
            LineKind::Level(level)
        } else if self.is_situation(line) {
            LineKind::Situation
        } else {
            LineKind::Text
        }
    }
}
