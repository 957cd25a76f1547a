//! Database schema SQL for the note store.
//!
//! A note owns its key points, fill-blank items, and MCQs (which own
//! their options); deleting a note cascades through all of them. Tags
//! are shared across notes through a join table.

pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    original_text TEXT NOT NULL,
    summary TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS key_points (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    text TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS quiz_fill (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    question TEXT NOT NULL,
    answer TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS mcq_questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    question TEXT NOT NULL,
    explanation TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS mcq_options (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    mcq_id INTEGER NOT NULL REFERENCES mcq_questions(id) ON DELETE CASCADE,
    option_text TEXT NOT NULL,
    is_correct INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS note_tags (
    note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
    PRIMARY KEY (note_id, tag_id)
);

CREATE INDEX IF NOT EXISTS idx_key_points_note ON key_points(note_id);
CREATE INDEX IF NOT EXISTS idx_quiz_fill_note ON quiz_fill(note_id);
CREATE INDEX IF NOT EXISTS idx_mcq_questions_note ON mcq_questions(note_id);
CREATE INDEX IF NOT EXISTS idx_mcq_options_mcq ON mcq_options(mcq_id);
CREATE INDEX IF NOT EXISTS idx_tags_name ON tags(name);
"#;
