use serde::{Deserialize, Serialize};

use crate::parser::MARKERS;

/// Topical group a situation belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
}

/// Stored situational question.
///
/// `content` carries the answer statement and explanation as trailing lines.
/// (content, level, group_id) is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id: i64,
  pub content: String,
  pub level: u32,
  pub group_id: i64,
  pub sort_order: Option<i64>,
}

/// Stored option, owned by exactly one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
  pub id: i64,
  pub question_id: i64,
  pub content: String,
  pub is_correct: bool,
}

/// Option ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDraft {
  pub content: String,
  pub is_correct: bool,
}

/// Question ready to be inserted, produced by resolving a parsed block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDraft {
  pub content: String,
  pub level: u32,
  pub group_id: i64,
  pub sort_order: usize,
  pub options: Vec<OptionDraft>,
  pub correct_letter: Option<char>,
}

impl QuestionDraft {
  pub fn has_correct_option(&self) -> bool {
    self.options.iter().any(|o| o.is_correct)
  }
}

/// A question as delivered to a test taker: the explanation is split back out
/// of the stored content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SituationView {
  pub id: i64,
  pub level: u32,
  pub group_id: i64,
  pub content: String,
  pub explanation: String,
  pub answers: Vec<AnswerOption>,
}

/// Split stored content at the explanation keyword.
///
/// Returns `(content_before, explanation)`; the explanation keeps its keyword
/// and is empty when the keyword is absent.
pub fn split_content(content: &str) -> (String, String) {
  match MARKERS.explanation_start(content) {
    Some(at) => (
      content[..at].trim_end().to_string(),
      content[at..].trim().to_string(),
    ),
    None => (content.to_string(), String::new()),
  }
}
