//! Tutorial repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and filtered-search APIs over the `tutorials` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each operation maps to exactly one SQL statement.
//! - All caller values are bound parameters; the title-search fragment is
//!   additionally LIKE-escaped so it always matches as a literal substring.
//! - Underlying database failures propagate unchanged; no retries, no
//!   local recovery.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::tutorial::{Tutorial, TutorialId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TUTORIAL_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    published
FROM tutorials";

const REQUIRED_COLUMNS: &[&'static str] = &["id", "title", "description", "published"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for tutorial persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Update was attempted with a record that was never saved (`id == None`).
    NotPersisted,
    /// Connection schema version does not match what this binary supports.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotPersisted => {
                write!(f, "tutorial has no id; save it before updating")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::InvalidData(message) => {
                write!(f, "invalid persisted tutorial data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for tutorial CRUD and filtered search.
pub trait TutorialRepository {
    /// Inserts a new row and returns the store-assigned id.
    ///
    /// Any `id` already present on the input is ignored.
    fn save(&self, tutorial: &Tutorial) -> RepoResult<TutorialId>;
    /// Overwrites `title`, `description` and `published` of the row matching
    /// the record's id. Returns the affected-row count; 0 means no row
    /// matched and nothing was changed.
    fn update(&self, tutorial: &Tutorial) -> RepoResult<usize>;
    /// Gets one tutorial by id, or `None` when no row matches.
    fn find_by_id(&self, id: TutorialId) -> RepoResult<Option<Tutorial>>;
    /// Deletes the row matching `id`. Returns the deleted-row count (0 or 1).
    fn delete_by_id(&self, id: TutorialId) -> RepoResult<usize>;
    /// Returns every row, order unspecified.
    fn find_all(&self) -> RepoResult<Vec<Tutorial>>;
    /// Returns all rows whose flag equals `published`, order unspecified.
    fn find_by_published(&self, published: bool) -> RepoResult<Vec<Tutorial>>;
    /// Returns all rows whose title contains `fragment`, matched
    /// case-insensitively and always as a literal substring.
    fn find_by_title_containing(&self, fragment: &str) -> RepoResult<Vec<Tutorial>>;
    /// Deletes every row and returns the deleted-row count.
    fn delete_all(&self) -> RepoResult<usize>;
}

/// SQLite-backed tutorial repository.
pub struct SqliteTutorialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTutorialRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TutorialRepository for SqliteTutorialRepository<'_> {
    fn save(&self, tutorial: &Tutorial) -> RepoResult<TutorialId> {
        self.conn.execute(
            "INSERT INTO tutorials (title, description, published)
             VALUES (?1, ?2, ?3);",
            params![
                tutorial.title.as_str(),
                tutorial.description.as_str(),
                bool_to_int(tutorial.published),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, tutorial: &Tutorial) -> RepoResult<usize> {
        let id = match tutorial.id {
            Some(id) => id,
            None => return Err(RepoError::NotPersisted),
        };

        let changed = self.conn.execute(
            "UPDATE tutorials
             SET
                title = ?1,
                description = ?2,
                published = ?3
             WHERE id = ?4;",
            params![
                tutorial.title.as_str(),
                tutorial.description.as_str(),
                bool_to_int(tutorial.published),
                id,
            ],
        )?;

        Ok(changed)
    }

    fn find_by_id(&self, id: TutorialId) -> RepoResult<Option<Tutorial>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TUTORIAL_SELECT_SQL}
             WHERE id = ?1
             LIMIT 2;"
        ))?;

        let mut rows = stmt.query(params![id])?;
        let first = match rows.next()? {
            Some(row) => parse_tutorial_row(row)?,
            None => return Ok(None),
        };

        // The keyed lookup has a single-row contract: a second row under the
        // same id is absorbed as absence. Unreachable while `id` is the
        // primary key.
        if rows.next()?.is_some() {
            return Ok(None);
        }

        Ok(Some(first))
    }

    fn delete_by_id(&self, id: TutorialId) -> RepoResult<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM tutorials WHERE id = ?1;", params![id])?;

        Ok(deleted)
    }

    fn find_all(&self) -> RepoResult<Vec<Tutorial>> {
        let mut stmt = self.conn.prepare(&format!("{TUTORIAL_SELECT_SQL};"))?;
        let rows = stmt.query([])?;
        collect_tutorials(rows)
    }

    fn find_by_published(&self, published: bool) -> RepoResult<Vec<Tutorial>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TUTORIAL_SELECT_SQL}
             WHERE published = ?1;"
        ))?;
        let rows = stmt.query(params![bool_to_int(published)])?;
        collect_tutorials(rows)
    }

    fn find_by_title_containing(&self, fragment: &str) -> RepoResult<Vec<Tutorial>> {
        // SQLite LIKE is case-insensitive over ASCII, which carries the
        // contains-match contract. The fragment is escaped so `%`, `_` and
        // `\` match themselves instead of acting as pattern syntax.
        let pattern = format!("%{}%", escape_like_fragment(fragment));

        let mut stmt = self.conn.prepare(&format!(
            "{TUTORIAL_SELECT_SQL}
             WHERE title LIKE ?1 ESCAPE '\\';"
        ))?;
        let rows = stmt.query(params![pattern])?;
        collect_tutorials(rows)
    }

    fn delete_all(&self) -> RepoResult<usize> {
        let deleted = self.conn.execute("DELETE FROM tutorials;", [])?;

        Ok(deleted)
    }
}

/// Escapes LIKE pattern metacharacters so a fragment matches literally.
fn escape_like_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn collect_tutorials(mut rows: rusqlite::Rows<'_>) -> RepoResult<Vec<Tutorial>> {
    let mut tutorials = Vec::new();
    while let Some(row) = rows.next()? {
        tutorials.push(parse_tutorial_row(row)?);
    }
    Ok(tutorials)
}

fn parse_tutorial_row(row: &Row<'_>) -> RepoResult<Tutorial> {
    let id: TutorialId = row.get("id")?;

    let published = match row.get::<_, i64>("published")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid published value `{other}` in tutorials.published"
            )));
        }
    };

    Ok(Tutorial {
        id: Some(id),
        title: row.get("title")?,
        description: row.get("description")?,
        published,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 =
        conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "tutorials")? {
        return Err(RepoError::MissingRequiredTable("tutorials"));
    }

    for &column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "tutorials", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "tutorials",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
