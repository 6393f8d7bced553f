//! Answer resolution and question content composition.

use serde::Serialize;

use super::markers::MARKERS;

/// What the answer zone says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedAnswer {
    pub correct_letter: Option<char>,
    /// Answer zone text before the explanation keyword
    pub answer_statement: String,
    /// Explanation keyword and everything after it, or empty
    pub explanation: String,
}

/// Extract the correct letter and split off the expert explanation.
pub fn resolve_answer(answer_text: Option<&str>) -> ResolvedAnswer {
    let Some(text) = answer_text.map(str::trim).filter(|t| !t.is_empty()) else {
        return ResolvedAnswer::default();
    };

    let correct_letter = MARKERS.answer_letter(text);
    let (statement, explanation) = match MARKERS.explanation_start(text) {
        Some(at) => (&text[..at], &text[at..]),
        None => (text, ""),
    };

    ResolvedAnswer {
        correct_letter,
        answer_statement: statement.trim().to_string(),
        explanation: explanation.trim().to_string(),
    }
}

/// Stored question content: question, then answer statement, then explanation.
///
/// Readers split stored content back apart at the explanation keyword, so the
/// order of these lines must not change.
pub fn compose_content(question_text: &str, resolved: &ResolvedAnswer) -> String {
    let mut content = question_text.to_string();
    for part in [&resolved.answer_statement, &resolved.explanation] {
        if !part.is_empty() {
            content.push('\n');
            content.push_str(part);
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_explanation_split() {
        let resolved = resolve_answer(Some(
            "Đáp án đúng: B. Giải thích chuyên gia: Trả đồ là hành động đúng.",
        ));
        assert_eq!(resolved.correct_letter, Some('B'));
        assert_eq!(resolved.answer_statement, "Đáp án đúng: B.");
        assert_eq!(resolved.explanation, "Giải thích chuyên gia: Trả đồ là hành động đúng.");
    }

    #[test]
    fn test_explanation_on_following_line() {
        let resolved = resolve_answer(Some("Đáp án: C\nGiải thích chuyên gia: Vì lý do an toàn."));
        assert_eq!(resolved.correct_letter, Some('C'));
        assert_eq!(resolved.answer_statement, "Đáp án: C");
        assert_eq!(resolved.explanation, "Giải thích chuyên gia: Vì lý do an toàn.");
    }

    #[test]
    fn test_no_explanation() {
        let resolved = resolve_answer(Some("Đáp án đúng: A"));
        assert_eq!(resolved.answer_statement, "Đáp án đúng: A");
        assert!(resolved.explanation.is_empty());
    }

    #[test]
    fn test_unresolvable_letter() {
        let resolved = resolve_answer(Some("Đáp án đúng: tùy hoàn cảnh"));
        assert_eq!(resolved.correct_letter, None);
        assert_eq!(resolved.answer_statement, "Đáp án đúng: tùy hoàn cảnh");
    }

    #[test]
    fn test_missing_answer_zone() {
        assert_eq!(resolve_answer(None), ResolvedAnswer::default());
        assert_eq!(resolve_answer(Some("   ")), ResolvedAnswer::default());
    }

    #[test]
    fn test_compose_content_order() {
        let resolved = resolve_answer(Some(
            "Đáp án đúng: B. Giải thích chuyên gia: Trả đồ là hành động đúng.",
        ));
        let content = compose_content("Tình huống: Bạn thấy ai đó làm rơi ví.", &resolved);
        assert_eq!(
            content,
            "Tình huống: Bạn thấy ai đó làm rơi ví.\nĐáp án đúng: B.\nGiải thích chuyên gia: Trả đồ là hành động đúng."
        );
    }

    #[test]
    fn test_compose_content_without_answer() {
        let content = compose_content("Tình huống 1", &ResolvedAnswer::default());
        assert_eq!(content, "Tình huống 1");
    }
}
