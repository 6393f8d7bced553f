use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::{split_content, AnswerOption, OptionDraft, Question, QuestionDraft, SituationView};

/// Find a question by its identity triple
pub fn find_question_id(conn: &Connection, content: &str, level: u32, group_id: i64) -> Result<Option<i64>> {
  conn
    .query_row(
      "SELECT id FROM situational_questions WHERE content = ?1 AND level = ?2 AND group_id = ?3",
      params![content, level, group_id],
      |row| row.get(0),
    )
    .optional()
}

pub fn insert_question(conn: &Connection, draft: &QuestionDraft) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO situational_questions (content, level, group_id, sort_order, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
    params![
      draft.content,
      draft.level,
      draft.group_id,
      draft.sort_order as i64,
      Utc::now().to_rfc3339(),
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn insert_answer(conn: &Connection, question_id: i64, option: &OptionDraft) -> Result<i64> {
  conn.execute(
    "INSERT INTO situational_answers (question_id, content, is_correct) VALUES (?1, ?2, ?3)",
    params![question_id, option.content, option.is_correct],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn get_answers_for_question(conn: &Connection, question_id: i64) -> Result<Vec<AnswerOption>> {
  let mut stmt = conn.prepare(
    "SELECT id, question_id, content, is_correct FROM situational_answers WHERE question_id = ?1 ORDER BY id",
  )?;
  let answers = stmt
    .query_map(params![question_id], |row| {
      Ok(AnswerOption {
        id: row.get(0)?,
        question_id: row.get(1)?,
        content: row.get(2)?,
        is_correct: row.get(3)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(answers)
}

/// Questions of a group, optionally restricted to one level, in import order
pub fn get_questions(conn: &Connection, group_id: i64, level: Option<u32>) -> Result<Vec<Question>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT id, content, level, group_id, sort_order
    FROM situational_questions
    WHERE group_id = ?1 AND (?2 IS NULL OR level = ?2)
    ORDER BY level ASC, id ASC
    "#,
  )?;
  let questions = stmt
    .query_map(params![group_id, level], |row| {
      Ok(Question {
        id: row.get(0)?,
        content: row.get(1)?,
        level: row.get(2)?,
        group_id: row.get(3)?,
        sort_order: row.get(4)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(questions)
}

/// Questions with their answers, explanation split back out of the content
pub fn list_situations(conn: &Connection, group_id: i64, level: Option<u32>) -> Result<Vec<SituationView>> {
  get_questions(conn, group_id, level)?
    .into_iter()
    .map(|q| -> Result<SituationView> {
      let answers = get_answers_for_question(conn, q.id)?;
      let (content, explanation) = split_content(&q.content);
      Ok(SituationView {
        id: q.id,
        level: q.level,
        group_id: q.group_id,
        content,
        explanation,
        answers,
      })
    })
    .collect()
}

/// Question totals per (group, level)
pub fn group_level_totals(conn: &Connection) -> Result<Vec<(i64, u32, i64)>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT group_id, level, COUNT(*)
    FROM situational_questions
    GROUP BY group_id, level
    ORDER BY group_id, level
    "#,
  )?;
  let totals = stmt
    .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
    .collect::<Result<Vec<_>>>()?;
  Ok(totals)
}

pub fn count_questions(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM situational_questions", [], |row| row.get(0))
}

pub fn count_answers(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM situational_answers", [], |row| row.get(0))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::ensure_groups;
  use crate::testing::TestEnv;

  fn draft(content: &str, level: u32, group_id: i64) -> QuestionDraft {
    QuestionDraft {
      content: content.to_string(),
      level,
      group_id,
      sort_order: 1,
      options: vec![
        OptionDraft { content: "A. Giữ lại".into(), is_correct: false },
        OptionDraft { content: "B. Trả lại".into(), is_correct: true },
      ],
      correct_letter: Some('B'),
    }
  }

  fn setup() -> TestEnv {
    let env = TestEnv::new().unwrap();
    ensure_groups(&env.conn).unwrap();
    env
  }

  #[test]
  fn test_find_by_identity_triple() {
    let env = setup();
    let d = draft("Tình huống 1", 1, 1);
    let id = insert_question(&env.conn, &d).unwrap();

    assert_eq!(find_question_id(&env.conn, "Tình huống 1", 1, 1).unwrap(), Some(id));
    assert_eq!(find_question_id(&env.conn, "Tình huống 1", 2, 1).unwrap(), None);
    assert_eq!(find_question_id(&env.conn, "Tình huống 1", 1, 2).unwrap(), None);
  }

  #[test]
  fn test_insert_question_requires_group() {
    let env = TestEnv::new().unwrap();
    assert!(insert_question(&env.conn, &draft("Tình huống 1", 1, 1)).is_err());
  }

  #[test]
  fn test_answers_round_trip() {
    let env = setup();
    let d = draft("Tình huống 1", 1, 1);
    let id = insert_question(&env.conn, &d).unwrap();
    for option in &d.options {
      insert_answer(&env.conn, id, option).unwrap();
    }

    let answers = get_answers_for_question(&env.conn, id).unwrap();
    assert_eq!(answers.len(), 2);
    assert!(!answers[0].is_correct);
    assert!(answers[1].is_correct);
    assert_eq!(answers[1].content, "B. Trả lại");
  }

  #[test]
  fn test_list_situations_splits_explanation() {
    let env = setup();
    let d = draft(
      "Tình huống: Bạn thấy ai đó làm rơi ví.\nĐáp án đúng: B.\nGiải thích chuyên gia: Trả đồ là hành động đúng.",
      2,
      1,
    );
    let id = insert_question(&env.conn, &d).unwrap();
    insert_answer(&env.conn, id, &d.options[1]).unwrap();

    let views = list_situations(&env.conn, 1, Some(2)).unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].content, "Tình huống: Bạn thấy ai đó làm rơi ví.\nĐáp án đúng: B.");
    assert_eq!(views[0].explanation, "Giải thích chuyên gia: Trả đồ là hành động đúng.");
    assert_eq!(views[0].answers.len(), 1);

    assert!(list_situations(&env.conn, 1, Some(1)).unwrap().is_empty());
    assert_eq!(list_situations(&env.conn, 1, None).unwrap().len(), 1);
  }

  #[test]
  fn test_totals_and_counts() {
    let env = setup();
    insert_question(&env.conn, &draft("Một", 1, 1)).unwrap();
    insert_question(&env.conn, &draft("Hai", 1, 1)).unwrap();
    insert_question(&env.conn, &draft("Ba", 2, 3)).unwrap();

    assert_eq!(group_level_totals(&env.conn).unwrap(), vec![(1, 1, 2), (3, 2, 1)]);
    assert_eq!(count_questions(&env.conn).unwrap(), 3);
    assert_eq!(count_answers(&env.conn).unwrap(), 0);
  }
}
