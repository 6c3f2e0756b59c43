//! SQL schema for the medinfo SQLite store.
//!
//! Executed at every connection startup. There are no migrations; the
//! `user_version` pragma only records which layout created the file.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being reused after the highest row is deleted.
CREATE TABLE IF NOT EXISTS diseases (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    name                TEXT NOT NULL CHECK (trim(name) <> ''),
    symptoms            TEXT NOT NULL CHECK (trim(symptoms) <> ''),
    causes              TEXT NOT NULL CHECK (trim(causes) <> ''),
    prevention          TEXT NOT NULL CHECK (trim(prevention) <> ''),
    when_to_see_doctor  TEXT NOT NULL CHECK (trim(when_to_see_doctor) <> '')
);

PRAGMA user_version = 1;
";
