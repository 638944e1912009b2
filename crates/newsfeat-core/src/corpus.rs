//! Labeled sentence corpus to CSV conversion.
//!
//! The input is one record per line, `<free text><DELIM><sentiment word>`.
//! The free text may itself contain the delimiter, so each line is split at
//! the *last* occurrence. Output is a two-column CSV (`Text,Label`) with the
//! label written as its integer code.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::labels::SentimentLabel;
use crate::CorpusError;

/// Delimiter used by the Financial PhraseBank sentence files.
pub const DEFAULT_DELIMITER: char = '@';

/// One converted corpus record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub text: String,
    pub label: SentimentLabel,
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
    #[serde(rename = "Label")]
    label: u8,
}

/// Split one corpus line into its text and sentiment label.
///
/// `line_no` is 1-based and only used for error context.
///
/// # Errors
///
/// - [`CorpusError::MalformedLine`] if the trimmed line has no delimiter
///   (this includes empty lines).
/// - [`CorpusError::UnknownLabel`] if the trailing tag is not one of the
///   three sentiment words.
pub fn parse_corpus_line(
    line: &str,
    delimiter: char,
    line_no: usize,
) -> Result<CorpusRow, CorpusError> {
    let (text, tag) = line
        .trim()
        .rsplit_once(delimiter)
        .ok_or(CorpusError::MalformedLine {
            line: line_no,
            delimiter,
        })?;

    let label = SentimentLabel::from_str(tag).map_err(|_| CorpusError::UnknownLabel {
        line: line_no,
        tag: tag.to_string(),
    })?;

    Ok(CorpusRow {
        text: text.to_string(),
        label,
    })
}

/// Read every row of a corpus file, preserving line order.
///
/// The file is decoded as UTF-8 when valid and as Latin-1 otherwise; the
/// PhraseBank distribution ships Latin-1 text.
///
/// # Errors
///
/// Returns [`CorpusError::Read`] on I/O failure, or the first line-level
/// error from [`parse_corpus_line`].
pub fn read_corpus(path: &Path, delimiter: char) -> Result<Vec<CorpusRow>, CorpusError> {
    let bytes = std::fs::read(path).map_err(|e| CorpusError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(path = %path.display(), "corpus is not UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    };

    content
        .lines()
        .enumerate()
        .map(|(i, line)| parse_corpus_line(line, delimiter, i + 1))
        .collect()
}

/// Write rows as CSV with a `Text,Label` header and no index column.
///
/// # Errors
///
/// Returns [`CorpusError::Write`] if the file cannot be created or written.
pub fn write_corpus_csv(path: &Path, rows: &[CorpusRow]) -> Result<(), CorpusError> {
    let write_err = |source: csv::Error| CorpusError::Write {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    if rows.is_empty() {
        writer.write_record(["Text", "Label"]).map_err(write_err)?;
    }
    for row in rows {
        writer
            .serialize(CsvRecord {
                text: &row.text,
                label: row.label.code(),
            })
            .map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;
    Ok(())
}

/// Convert a delimited corpus file into a `Text,Label` CSV file.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Propagates any [`CorpusError`] from reading, parsing, or writing. Nothing
/// is written if any input line fails to parse.
pub fn convert_corpus(input: &Path, output: &Path, delimiter: char) -> Result<usize, CorpusError> {
    let rows = read_corpus(input, delimiter)?;
    write_corpus_csv(output, &rows)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rows = rows.len(),
        "converted corpus"
    );
    Ok(rows.len())
}
