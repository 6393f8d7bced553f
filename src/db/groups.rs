use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::config::GROUPS;
use crate::domain::Group;

pub fn find_group_by_id(conn: &Connection, id: i64) -> Result<Option<Group>> {
  conn
    .query_row(
      "SELECT id, name, description FROM situation_groups WHERE id = ?1",
      params![id],
      |row| {
        Ok(Group {
          id: row.get(0)?,
          name: row.get(1)?,
          description: row.get(2)?,
        })
      },
    )
    .optional()
}

pub fn insert_group(conn: &Connection, group: &Group) -> Result<()> {
  conn.execute(
    "INSERT INTO situation_groups (id, name, description) VALUES (?1, ?2, ?3)",
    params![group.id, group.name, group.description],
  )?;
  Ok(())
}

/// Lookup-or-create every configured group. Returns how many were created.
///
/// Existing rows are left as they are, even if their name differs.
pub fn ensure_groups(conn: &Connection) -> Result<usize> {
  let mut created = 0;
  for info in &GROUPS {
    if find_group_by_id(conn, info.id)?.is_some() {
      continue;
    }
    insert_group(
      conn,
      &Group {
        id: info.id,
        name: info.name.to_string(),
        description: Some(info.description.to_string()),
      },
    )?;
    created += 1;
  }
  Ok(created)
}

pub fn get_all_groups(conn: &Connection) -> Result<Vec<Group>> {
  let mut stmt = conn.prepare("SELECT id, name, description FROM situation_groups ORDER BY id")?;
  let groups = stmt
    .query_map([], |row| {
      Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(groups)
}
