//! Situation document parsing.
//!
//! Turns the paragraphs of one document into [`ParsedBlock`]s:
//!
//! 1. **Normalize**: trim, drop empty lines ([`normalize`])
//! 2. **Scan**: split into blocks at situation/level markers ([`scanner`])
//! 3. **Segment**: question / options / answer zones ([`segment`])
//! 4. **Assemble** options and **resolve** the answer ([`options`], [`answer`])
//!
//! Every stage is a pure function; nothing here touches the database.

pub mod answer;
pub mod markers;
pub mod normalize;
pub mod options;
pub mod scanner;
pub mod segment;

pub use answer::{compose_content, resolve_answer, ResolvedAnswer};
pub use markers::{LineKind, MARKERS};
pub use normalize::normalize_lines;
pub use options::{assemble_options, mark_correct};
pub use scanner::{scan_blocks, RawBlock};
pub use segment::{segment, Zones};

use serde::Serialize;

use crate::domain::QuestionDraft;

/// One situation as recovered from the document, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBlock {
    pub level: u32,
    pub group_id: Option<i64>,
    /// 1-based position within the document
    pub ordinal: usize,
    pub question_text: Option<String>,
    pub option_texts: Vec<String>,
    pub answer_text: Option<String>,
}

impl ParsedBlock {
    /// Segment a raw block and assemble its options.
    pub fn from_raw(raw: &RawBlock) -> Self {
        let zones = segment(&raw.lines);
        Self {
            level: raw.level,
            group_id: raw.group_id,
            ordinal: raw.ordinal,
            question_text: segment::join_zone(zones.question),
            option_texts: assemble_options(zones.options),
            answer_text: segment::join_zone(zones.answer),
        }
    }

    /// Resolve the answer zone against the options.
    ///
    /// Returns `None` for blocks that must not be stored: no question text or
    /// no group.
    pub fn resolve(&self) -> Option<QuestionDraft> {
        let question_text = self.question_text.as_deref()?;
        let group_id = self.group_id?;

        let resolved = resolve_answer(self.answer_text.as_deref());
        Some(QuestionDraft {
            content: compose_content(question_text, &resolved),
            level: self.level,
            group_id,
            sort_order: self.ordinal,
            options: mark_correct(&self.option_texts, resolved.correct_letter),
            correct_letter: resolved.correct_letter,
        })
    }
}

/// Parse one document's paragraphs into blocks tagged with `group_id`.
pub fn parse_document<S: AsRef<str>>(paragraphs: &[S], group_id: Option<i64>) -> Vec<ParsedBlock> {
    let lines = normalize_lines(paragraphs);
    scan_blocks(&lines, group_id)
        .iter()
        .map(ParsedBlock::from_raw)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: [&str; 4] = [
        "Tình huống: Bạn thấy ai đó làm rơi ví.",
        "A. Giữ lại cho mình",
        "B. Trả lại cho người mất",
        "Đáp án đúng: B. Giải thích chuyên gia: Trả đồ là hành động đúng.",
    ];

    #[test]
    fn test_wallet_scenario() {
        let blocks = parse_document(&WALLET, Some(1));
        assert_eq!(blocks.len(), 1);

        let draft = blocks[0].resolve().unwrap();
        assert_eq!(draft.level, 1);
        assert_eq!(draft.group_id, 1);
        assert_eq!(draft.correct_letter, Some('B'));
        assert_eq!(draft.options.len(), 2);
        assert_eq!(draft.options[0].content, "A. Giữ lại cho mình");
        assert!(!draft.options[0].is_correct);
        assert_eq!(draft.options[1].content, "B. Trả lại cho người mất");
        assert!(draft.options[1].is_correct);
        assert!(draft.content.ends_with(
            "Đáp án đúng: B.\nGiải thích chuyên gia: Trả đồ là hành động đúng."
        ));
        assert!(draft.content.starts_with("Tình huống: Bạn thấy ai đó làm rơi ví."));
    }

    #[test]
    fn test_unclassified_block_not_resolved() {
        let blocks = parse_document(&WALLET, None);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].resolve().is_none());
    }

    #[test]
    fn test_block_without_question_text_not_resolved() {
        let block = ParsedBlock {
            level: 1,
            group_id: Some(1),
            ordinal: 1,
            question_text: None,
            option_texts: vec!["A. X".into()],
            answer_text: None,
        };
        assert!(block.resolve().is_none());
    }

    #[test]
    fn test_missing_answer_imports_without_correct_flag() {
        let blocks = parse_document(&["Tình huống 1: Một", "A. X", "B. Y"], Some(2));
        let draft = blocks[0].resolve().unwrap();
        assert_eq!(draft.content, "Tình huống 1: Một");
        assert_eq!(draft.correct_letter, None);
        assert!(draft.options.iter().all(|o| !o.is_correct));
    }

    #[test]
    fn test_multi_level_document() {
        let paragraphs = [
            "BỘ CÂU HỎI",
            "Level 1",
            "Tình huống 1: Bạn mượn bút của bạn.",
            "A. Trả lại sau khi dùng",
            "B. Giữ luôn",
            "Đáp án đúng: A",
            "",
            "Level 2",
            "Tình huống 2: Bạn bị bạn",
            "trêu chọc trước lớp.",
            "A. Đánh lại",
            "B. Nói chuyện riêng với bạn",
            "sau giờ học",
            "Đáp án đúng: B",
            "Giải thích chuyên gia: Giữ bình tĩnh giúp giải quyết mâu thuẫn.",
        ];
        let blocks = parse_document(&paragraphs, Some(1));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].level, 1);
        assert_eq!(blocks[1].level, 2);
        assert_eq!(
            blocks[1].question_text.as_deref(),
            Some("Tình huống 2: Bạn bị bạn\ntrêu chọc trước lớp.")
        );
        assert_eq!(blocks[1].option_texts[1], "B. Nói chuyện riêng với bạn sau giờ học");

        let second = blocks[1].resolve().unwrap();
        assert!(second.options[1].is_correct);
        assert!(second.content.ends_with("Giải thích chuyên gia: Giữ bình tĩnh giúp giải quyết mâu thuẫn."));
    }

    #[test]
    fn test_at_most_one_correct_option() {
        let paragraphs = [
            "Tình huống 1",
            "A. Một",
            "B. Hai",
            "C. Ba",
            "D. Bốn",
            "Đáp án: C",
        ];
        for block in parse_document(&paragraphs, Some(3)) {
            let draft = block.resolve().unwrap();
            assert_eq!(draft.options.iter().filter(|o| o.is_correct).count(), 1);
        }
    }
}
