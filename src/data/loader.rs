use std::fs;
use std::path::Path;

use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use crate::models::QuestionRecord;

const QUESTIONS_QUERY: &str = "SELECT question, answer, explanation, \
     distractor1, distractor2, distractor3, distractor4, distractor5 \
     FROM questions";

const FIRST_DISTRACTOR_COLUMN: usize = 3;
const DISTRACTOR_COLUMNS: usize = 5;

/// Failure to read questions from a store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load every question from the store at `path`.
///
/// Files ending in `.json` are read as a JSON array of questions; anything
/// else is opened read-only as a SQLite database with a `questions` table.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let questions = if is_json {
        load_questions_from_json(path)?
    } else {
        load_questions_from_sqlite(path)?
    };

    log::info!("loaded {} question(s) from {}", questions.len(), path.display());
    Ok(questions)
}

pub fn load_questions_from_sqlite<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    log::debug!("opened question database {}", path.display());

    let mut stmt = conn.prepare(QUESTIONS_QUERY)?;
    let rows = stmt.query_map([], question_from_row)?;
    let questions = rows.collect::<Result<Vec<_>, _>>()?;

    Ok(questions)
}

pub fn load_questions_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuestionRecord>, LoadError> {
    let json_content = fs::read_to_string(path)?;
    let questions: Vec<QuestionRecord> = serde_json::from_str(&json_content)?;
    Ok(questions)
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<QuestionRecord> {
    let mut distractors = Vec::with_capacity(DISTRACTOR_COLUMNS);
    for column in FIRST_DISTRACTOR_COLUMN..FIRST_DISTRACTOR_COLUMN + DISTRACTOR_COLUMNS {
        if let Some(distractor) = text_cell(row, column)? {
            distractors.push(distractor);
        }
    }

    Ok(QuestionRecord::new(
        required_text_cell(row, 0)?,
        required_text_cell(row, 1)?,
        text_cell(row, 2)?.unwrap_or_default(),
        distractors,
    ))
}

/// Read a cell as text whatever its storage class. NULL is absent.
fn text_cell(row: &Row<'_>, column: usize) -> rusqlite::Result<Option<String>> {
    let text = match row.get_ref(column)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    };
    Ok(text)
}

fn required_text_cell(row: &Row<'_>, column: usize) -> rusqlite::Result<String> {
    text_cell(row, column)?.ok_or_else(|| {
        let name = row.as_ref().column_name(column).unwrap_or("?");
        rusqlite::Error::InvalidColumnType(column, name.to_string(), Type::Null)
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn create_db(dir: &TempDir, rows: &[[Option<&str>; 8]]) -> PathBuf {
        let path = dir.path().join("trivia.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE questions (
                question TEXT, answer TEXT, explanation TEXT,
                distractor1 TEXT, distractor2 TEXT, distractor3 TEXT,
                distractor4 TEXT, distractor5 TEXT
            )",
        )
        .unwrap();
        for row in rows {
            conn.execute(
                "INSERT INTO questions VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params_from_iter(row.iter()),
            )
            .unwrap();
        }
        path
    }

    #[test]
    fn test_load_from_sqlite() {
        let dir = TempDir::new().unwrap();
        let path = create_db(
            &dir,
            &[
                [
                    Some("2+2?"),
                    Some("4"),
                    Some("math"),
                    Some("3"),
                    Some("5"),
                    Some("6"),
                    Some("7"),
                    Some("8"),
                ],
                [
                    Some("Capital of France?"),
                    Some("Paris"),
                    Some("geography"),
                    Some("Lyon"),
                    None,
                    Some(""),
                    None,
                    None,
                ],
            ],
        );

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 2);

        let math = questions.iter().find(|q| q.answer == "4").unwrap();
        assert_eq!(math.distractors(), ["3", "5", "6", "7", "8"]);

        let capital = questions.iter().find(|q| q.answer == "Paris").unwrap();
        assert_eq!(capital.explanation, "geography");
        assert_eq!(capital.distractors(), ["Lyon"]);
    }

    #[test]
    fn test_all_distractors_null() {
        let dir = TempDir::new().unwrap();
        let path = create_db(
            &dir,
            &[[Some("Q"), Some("A"), None, None, None, None, None, None]],
        );

        let questions = load_questions(&path).unwrap();
        assert!(questions[0].distractors().is_empty());
        assert_eq!(questions[0].explanation, "");
    }

    #[test]
    fn test_untyped_columns_with_numbers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("untyped.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE questions (
                question, answer, explanation,
                distractor1, distractor2, distractor3, distractor4, distractor5
            );
            INSERT INTO questions VALUES ('2+2?', 4, 'math', 3, 5, 2.5, NULL, NULL);
            INSERT INTO questions VALUES ('Capital?', 'Paris', 'geo', 'Lyon', NULL, NULL, NULL, NULL);",
        )
        .unwrap();
        drop(conn);

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 2);

        let math = questions.iter().find(|q| q.question == "2+2?").unwrap();
        assert_eq!(math.answer, "4");
        assert_eq!(math.distractors(), ["3", "5", "2.5"]);

        let capital = questions.iter().find(|q| q.answer == "Paris").unwrap();
        assert_eq!(capital.distractors(), ["Lyon"]);
    }

    #[test]
    fn test_null_answer_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = create_db(
            &dir,
            &[[Some("Q"), None, Some("E"), None, None, None, None, None]],
        );

        assert!(matches!(
            load_questions(&path),
            Err(LoadError::Sqlite(rusqlite::Error::InvalidColumnType(1, _, _)))
        ));
    }

    #[test]
    fn test_missing_database_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.db");

        let result = load_questions(&path);
        assert!(matches!(result, Err(LoadError::Sqlite(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (x TEXT)")
            .unwrap();

        let err = load_questions(&path).unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn test_load_from_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[{"question":"Q1","answer":"A1","explanation":"E1","distractors":["x","y"]},
                {"question":"Q2","answer":"A2","explanation":"E2"}]"#,
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].distractors(), ["x", "y"]);
        assert!(questions[1].distractors().is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_questions(&path), Err(LoadError::Json(_))));
    }
}
