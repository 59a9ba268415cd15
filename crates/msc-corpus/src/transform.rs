//! Directory-of-text-files to corpus table transform.

use std::fs;
use std::path::Path;

use msc_error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Extension every statement file must carry.
pub const TEXT_EXTENSION: &str = "txt";

/// Default name of the corpus table artifact.
pub const CORPUS_FILE_NAME: &str = "ms_statements.csv";

/// One corpus row: a single statement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    /// Filename without the extension
    pub url_id: String,

    /// Number of whitespace-delimited tokens in the document
    pub word_count: u64,

    /// The tokens re-joined with single spaces
    pub contents: String,
}

/// Build one corpus row from a single statement file.
///
/// The file is read as UTF-8 and split on whitespace runs, so the original
/// inter-token whitespace (including newlines) is not preserved in
/// `contents`.
pub fn corpus_row(path: &Path) -> Result<CorpusRow> {
    let text = fs::read_to_string(path).map_err(|e| CorpusError::InvalidText {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let tokens: Vec<&str> = text.split_whitespace().collect();

    let url_id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(CorpusRow {
        url_id,
        word_count: tokens.len() as u64,
        contents: tokens.join(" "),
    })
}

/// Build the full corpus from a directory of statement files.
///
/// Every immediate entry must be a regular file named `*.txt`; a
/// subdirectory or a differently-extensioned file is a hard error, not a
/// skip. Rows come back in directory-iteration order, which is not
/// guaranteed sorted.
///
/// # Errors
///
/// - [`CorpusError::NotADirectory`] when `dir` does not exist or is a file
/// - [`CorpusError::UnexpectedEntry`] on any non-conforming entry
pub fn build_corpus(dir: &Path) -> Result<Vec<CorpusRow>> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory(dir.display().to_string()).into());
    }

    let mut rows = Vec::new();

    let entries =
        fs::read_dir(dir).map_err(|e| CorpusError::Io(format!("{}: {}", dir.display(), e)))?;

    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::Io(format!("{}: {}", dir.display(), e)))?;
        let path = entry.path();

        let is_text_file = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == TEXT_EXTENSION);

        if !is_text_file {
            return Err(CorpusError::UnexpectedEntry(path.display().to_string()).into());
        }

        let row = corpus_row(&path)?;
        debug!(url_id = %row.url_id, word_count = row.word_count, "Transformed statement");
        rows.push(row);
    }

    info!(dir = %dir.display(), rows = rows.len(), "Built corpus");

    Ok(rows)
}

/// Write the corpus rows as a single CSV table.
///
/// Columns are `url_id,word_count,contents`, header row included. Any
/// existing artifact at `path` is overwritten.
pub fn write_corpus(path: &Path, rows: &[CorpusRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| CorpusError::TableWrite(format!("opening {}: {}", path.display(), e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| CorpusError::TableWrite(format!("writing row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| CorpusError::TableWrite(format!("flushing {}: {}", path.display(), e)))?;

    info!(path = %path.display(), rows = rows.len(), "Wrote corpus table");

    Ok(())
}
