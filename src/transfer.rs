//! Export and import of board documents.
//!
//! An exported document is the pretty-printed snapshot
//! (`{notes, strokes, viewport, jobs}`) named `idea-board-YYYY-MM-DD.json`.
//! Import requires `notes` and `strokes` to be present; everything else is
//! defaulted. A rejected import never touches the board.

use crate::board::{Board, BoardSnapshot, ChangeOrigin};
use crate::constants::EXPORT_FILE_PREFIX;
use crate::error::{BoardResult, ImportError};
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};

const REQUIRED_FIELDS: [&str; 2] = ["notes", "strokes"];

pub fn export_json(board: &Board) -> BoardResult<String> {
    Ok(serde_json::to_string_pretty(&board.snapshot())?)
}

/// `idea-board-2024-05-01.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}-{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Write today's export (UTC date) into `dir`, returning the file path
pub fn export_to_dir(board: &Board, dir: &Path) -> BoardResult<PathBuf> {
    export_to_dir_dated(board, dir, Utc::now().date_naive())
}

pub fn export_to_dir_dated(board: &Board, dir: &Path, date: NaiveDate) -> BoardResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, export_json(board)?)?;
    tracing::info!("Exported board to {}", path.display());
    Ok(path)
}

/// Parse and validate a board document
pub fn parse_document(text: &str) -> Result<BoardSnapshot, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(map) = &value else {
        return Err(ImportError::NotAnObject);
    };
    for field in REQUIRED_FIELDS {
        match map.get(field) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                return Err(ImportError::MissingField(field));
            }
            Some(_) => {}
        }
    }
    Ok(BoardSnapshot::from_value(&value))
}

/// Validate a document and load it wholesale into the board
pub fn import_json(board: &mut Board, text: &str) -> BoardResult<()> {
    let snapshot = parse_document(text).inspect_err(|e| {
        tracing::warn!("Rejected board import: {}", e);
    })?;
    board.load_board(snapshot, ChangeOrigin::Local);
    Ok(())
}

pub fn import_file(board: &mut Board, path: &Path) -> BoardResult<()> {
    let text = std::fs::read_to_string(path)?;
    import_json(board, &text)?;
    tracing::info!("Imported board from {}", path.display());
    Ok(())
}
