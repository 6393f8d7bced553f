use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Create tables with COMPLETE schema for new databases
  // Migrations below handle upgrades for existing databases
  conn.execute_batch(
    r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS situation_groups (
      id INTEGER PRIMARY KEY,
      name TEXT NOT NULL,
      description TEXT
    );

    CREATE TABLE IF NOT EXISTS situational_questions (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      content TEXT NOT NULL,
      level INTEGER NOT NULL,
      group_id INTEGER NOT NULL,
      sort_order INTEGER,
      created_at TEXT NOT NULL,
      FOREIGN KEY (group_id) REFERENCES situation_groups(id)
    );

    CREATE TABLE IF NOT EXISTS situational_answers (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      question_id INTEGER NOT NULL,
      content TEXT NOT NULL,
      is_correct INTEGER NOT NULL DEFAULT 0,
      FOREIGN KEY (question_id) REFERENCES situational_questions(id) ON DELETE CASCADE
    );

    -- Indexes
    CREATE UNIQUE INDEX IF NOT EXISTS idx_questions_identity
      ON situational_questions(content, level, group_id);
    CREATE INDEX IF NOT EXISTS idx_questions_group_level ON situational_questions(group_id, level);
    CREATE INDEX IF NOT EXISTS idx_answers_question_id ON situational_answers(question_id);
    "#,
  )?;

  // ============================================================
  // MIGRATIONS FOR EXISTING DATABASES
  // These are no-ops for new databases (columns already exist)
  // ============================================================

  // Migration: Record block position within its source document
  add_column_if_missing(conn, "situational_questions", "sort_order", "INTEGER")?;

  Ok(())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
  conn
    .prepare(&format!("SELECT {} FROM {} LIMIT 1", column, table))
    .is_ok()
}

/// Add a column if it doesn't already exist
fn add_column_if_missing(conn: &Connection, table: &str, column: &str, column_def: &str) -> Result<()> {
  if !column_exists(conn, table, column) {
    conn.execute(
      &format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def),
      [],
    )?;
  }
  Ok(())
}
