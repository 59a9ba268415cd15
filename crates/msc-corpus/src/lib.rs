//! msc-corpus - plain-text statements to a single tabular dataset.
//!
//! Reads a flat directory of downloaded statement files and produces one row
//! per document: identifier, whitespace-token count, and the tokens
//! re-joined with single spaces. The collection is persisted as one CSV
//! artifact for downstream analysis.

mod transform;

pub use transform::{
    CORPUS_FILE_NAME, CorpusRow, TEXT_EXTENSION, build_corpus, corpus_row, write_corpus,
};
