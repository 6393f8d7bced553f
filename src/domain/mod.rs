pub mod situation;

pub use situation::{split_content, AnswerOption, Group, OptionDraft, Question, QuestionDraft, SituationView};
