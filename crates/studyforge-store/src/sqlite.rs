//! SQLite-backed note store.
//!
//! A single connection behind a mutex, WAL journaling, foreign keys on.
//! Saving a note writes the note row and all owned sub-artifacts in one
//! transaction; deletion cascades through the schema's foreign keys.

use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use tracing::info;

use crate::schema::SCHEMA_SQL;
use crate::types::*;
use studyforge_core::{Error, Result};

pub struct NoteStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl NoteStore {
    /// Open or create the note store. `db_dir` is the directory; the
    /// file will be `db_dir/studyforge.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let db_path = db_dir.join("studyforge.db");

        let conn = Connection::open(&db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        let count = store.count_notes()?;
        info!(
            "NoteStore initialized: {} notes, path={}",
            count,
            store.db_path.display()
        );
        Ok(store)
    }

    pub fn count_notes(&self) -> Result<i64> {
        let conn = self.conn.lock();
        conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Save a note with all sub-artifacts in one transaction. Returns
    /// the fully hydrated note with its assigned identifier.
    pub fn save_note(&self, payload: &NewNote) -> Result<NoteDetail> {
        let note_id = {
            let mut conn = self.conn.lock();
            let tx = conn
                .transaction()
                .map_err(|e| Error::Database(e.to_string()))?;

            let now = Utc::now().to_rfc3339();
            tx.execute(
                "INSERT INTO notes (original_text, summary, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![payload.original_text, payload.summary, now, now],
            )
            .map_err(|e| Error::Database(e.to_string()))?;
            let note_id = tx.last_insert_rowid();

            for kp in &payload.key_points {
                tx.execute(
                    "INSERT INTO key_points (note_id, text) VALUES (?1, ?2)",
                    params![note_id, kp],
                )
                .map_err(|e| Error::Database(e.to_string()))?;
            }

            for q in &payload.quiz {
                tx.execute(
                    "INSERT INTO quiz_fill (note_id, question, answer) VALUES (?1, ?2, ?3)",
                    params![note_id, q.question, q.answer],
                )
                .map_err(|e| Error::Database(e.to_string()))?;
            }

            for mcq in &payload.mcqs {
                tx.execute(
                    "INSERT INTO mcq_questions (note_id, question, explanation, created_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![note_id, mcq.question, mcq.explanation, now],
                )
                .map_err(|e| Error::Database(e.to_string()))?;
                let mcq_id = tx.last_insert_rowid();
                for opt in &mcq.options {
                    tx.execute(
                        "INSERT INTO mcq_options (mcq_id, option_text, is_correct)
                         VALUES (?1, ?2, ?3)",
                        params![mcq_id, opt.option_text, opt.is_correct],
                    )
                    .map_err(|e| Error::Database(e.to_string()))?;
                }
            }

            for tag in &payload.tags {
                let tag_id = Self::get_or_create_tag(&tx, tag)?;
                tx.execute(
                    "INSERT OR IGNORE INTO note_tags (note_id, tag_id) VALUES (?1, ?2)",
                    params![note_id, tag_id],
                )
                .map_err(|e| Error::Database(e.to_string()))?;
            }

            tx.commit().map_err(|e| Error::Database(e.to_string()))?;
            note_id
        };

        self.get_note(note_id)?
            .ok_or_else(|| Error::Internal(format!("note {} vanished after save", note_id)))
    }

    /// Reuse an existing tag by trimmed name or insert a new one.
    fn get_or_create_tag(tx: &Transaction<'_>, name: &str) -> Result<i64> {
        let name = name.trim();
        let existing: Option<i64> = tx
            .query_row("SELECT id FROM tags WHERE name = ?1", params![name], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        if let Some(id) = existing {
            return Ok(id);
        }
        tx.execute("INSERT INTO tags (name) VALUES (?1)", params![name])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(tx.last_insert_rowid())
    }

    /// Fetch a note with all owned sub-artifacts.
    pub fn get_note(&self, note_id: i64) -> Result<Option<NoteDetail>> {
        let conn = self.conn.lock();

        let head = conn
            .prepare_cached(
                "SELECT id, original_text, summary, created_at, updated_at
                 FROM notes WHERE id = ?1",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![note_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        let Some((id, original_text, summary, created_at, updated_at)) = head else {
            return Ok(None);
        };

        let key_points = Self::collect(
            &conn,
            "SELECT text FROM key_points WHERE note_id = ?1 ORDER BY id",
            note_id,
            |row| row.get(0),
        )?;

        let quiz = Self::collect(
            &conn,
            "SELECT question, answer FROM quiz_fill WHERE note_id = ?1 ORDER BY id",
            note_id,
            |row| {
                Ok(QuizFill {
                    question: row.get(0)?,
                    answer: row.get(1)?,
                })
            },
        )?;

        let mcq_rows: Vec<(i64, String, String)> = Self::collect(
            &conn,
            "SELECT id, question, explanation FROM mcq_questions
             WHERE note_id = ?1 ORDER BY id",
            note_id,
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        let mut mcqs = Vec::with_capacity(mcq_rows.len());
        for (mcq_id, question, explanation) in mcq_rows {
            let options = Self::collect(
                &conn,
                "SELECT option_text, is_correct FROM mcq_options
                 WHERE mcq_id = ?1 ORDER BY id",
                mcq_id,
                |row| {
                    Ok(McqOption {
                        option_text: row.get(0)?,
                        is_correct: row.get(1)?,
                    })
                },
            )?;
            mcqs.push(McqQuestion {
                question,
                explanation,
                options,
            });
        }

        let tags = Self::collect(
            &conn,
            "SELECT t.name FROM tags t
             JOIN note_tags nt ON nt.tag_id = t.id
             WHERE nt.note_id = ?1 ORDER BY t.name",
            note_id,
            |row| row.get(0),
        )?;

        Ok(Some(NoteDetail {
            id,
            original_text,
            summary,
            key_points,
            quiz,
            mcqs,
            tags,
            created_at,
            updated_at,
        }))
    }

    /// List all notes, most recently updated first.
    pub fn list_notes(&self) -> Result<Vec<NoteBrief>> {
        let conn = self.conn.lock();
        let rows: Vec<(i64, String, String)> = conn
            .prepare_cached(
                "SELECT id, summary, updated_at FROM notes ORDER BY updated_at DESC, id DESC",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .map_err(|e| Error::Database(e.to_string()))?
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut briefs = Vec::with_capacity(rows.len());
        for (id, summary, updated_at) in rows {
            let tags = Self::collect(
                &conn,
                "SELECT t.name FROM tags t
                 JOIN note_tags nt ON nt.tag_id = t.id
                 WHERE nt.note_id = ?1 ORDER BY t.name",
                id,
                |row| row.get(0),
            )?;
            briefs.push(NoteBrief {
                id,
                summary,
                tags,
                updated_at,
            });
        }
        Ok(briefs)
    }

    /// Delete a note and, via cascade, everything it owns. Returns false
    /// if no such note exists.
    pub fn delete_note(&self, note_id: i64) -> Result<bool> {
        let conn = self.conn.lock();
        let affected = conn
            .execute("DELETE FROM notes WHERE id = ?1", params![note_id])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(affected > 0)
    }

    fn collect<T>(
        conn: &Connection,
        sql: &str,
        id: i64,
        map: impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        conn.prepare_cached(sql)
            .map_err(|e| Error::Database(e.to_string()))?
            .query_map(params![id], map)
            .map_err(|e| Error::Database(e.to_string()))?
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Database(e.to_string()))
    }
}
