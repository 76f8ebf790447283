use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;

use thiserror::Error;

use super::model::DatasetRegistry;

/// The test vectors shipped with the crate, compiled in.
pub const EMBEDDED_DATASET: &str = include_str!("../../resources/test.in");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a load was abandoned. Line numbers are 1-based, columns are the
/// 0-based token index within the line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("read error at line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}, token {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the compiled-in dataset.
pub fn load_embedded() -> Result<DatasetRegistry, LoadError> {
    load_str(EMBEDDED_DATASET)
}

/// Parse a dataset file from disk.
pub fn load_file(path: &Path) -> Result<DatasetRegistry, LoadError> {
    let file = File::open(path).map_err(|source| {
        let err = LoadError::Open {
            path: path.display().to_string(),
            source,
        };
        log::error!("dataset load failed: {err}");
        err
    })?;
    load_reader(BufReader::new(file))
}

/// Parse a dataset held in memory.
pub fn load_str(text: &str) -> Result<DatasetRegistry, LoadError> {
    load_reader(text.as_bytes())
}

/// Parse consecutive pairs of lines into a [`DatasetRegistry`].
///
/// Each pair is keyed by the token count of its first line; a later pair
/// with the same count replaces the earlier one. A final line without a
/// partner is dropped. Any read or number error abandons the whole load,
/// so callers either get every pair or none.
pub fn load_reader<R: BufRead>(reader: R) -> Result<DatasetRegistry, LoadError> {
    match parse_pairs(reader) {
        Ok(registry) => {
            log::info!(
                "loaded {} dataset(s), sizes {:?}",
                registry.len(),
                registry.sizes().collect::<Vec<_>>()
            );
            Ok(registry)
        }
        Err(err) => {
            log::error!("dataset load failed: {err}");
            Err(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Line-pair parser
// ---------------------------------------------------------------------------

fn parse_pairs<R: BufRead>(reader: R) -> Result<DatasetRegistry, LoadError> {
    let mut registry = DatasetRegistry::default();
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, res)| (i + 1, res));

    while let Some((line_a, first)) = lines.next() {
        let first = first.map_err(|source| LoadError::Io { line: line_a, source })?;
        let Some((line_b, second)) = lines.next() else {
            log::warn!("ignoring unpaired trailing line {line_a}");
            break;
        };
        let second = second.map_err(|source| LoadError::Io { line: line_b, source })?;

        let a = parse_row(&first, line_a)?;
        let b = parse_row(&second, line_b)?;

        let replaced = registry.insert_rows(&a, &b);
        log::debug!(
            "lines {line_a}-{line_b}: size {}{}",
            a.len(),
            if replaced { " (replaced earlier pair)" } else { "" }
        );
    }

    Ok(registry)
}

/// Split on single spaces and parse every token.
///
/// Trailing empty tokens are discarded; an empty token anywhere else (a
/// leading or doubled space, or a blank line) is a malformed number.
fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, LoadError> {
    let mut tokens: Vec<&str> = line.split(' ').collect();
    if !line.is_empty() {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }

    tokens
        .into_iter()
        .enumerate()
        .map(|(column, tok)| {
            tok.parse::<f64>().map_err(|source| LoadError::InvalidNumber {
                line: line_no,
                column,
                token: tok.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn worked_example() {
        let reg = load_str("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(reg.sizes().collect::<Vec<_>>(), vec![3]);

        let flat = reg.flat(3).unwrap();
        assert_eq!(&*flat.v1, &[1.0, 2.0, 3.0]);
        assert_eq!(&*flat.v2, &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn malformed_token_discards_everything() {
        let err = load_str("1 2 3\nfoo\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, column, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, 0);
                assert_eq!(token, "foo");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_in_late_pair_discards_earlier_pairs() {
        let err = load_str("1 2\n3 4\n5 6 7\n8 x 9\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 4, column: 1, .. }));
    }

    #[test]
    fn one_insertion_per_pair() {
        let reg = load_str("1\n2\n1 2\n3 4\n1 2 3 4\n5 6 7 8\n").unwrap();
        assert_eq!(reg.sizes().collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn later_pair_of_same_length_wins() {
        let reg = load_str("1 2\n3 4\n5 6\n7 8\n").unwrap();
        assert_eq!(reg.len(), 1);

        let flat = reg.flat(2).unwrap();
        assert_eq!(&*flat.v1, &[5.0, 6.0]);
        assert_eq!(&*flat.v2, &[7.0, 8.0]);
        let seq = reg.sequences(2).unwrap();
        assert_eq!(*seq.v1[0], 5.0);
        assert_eq!(*seq.v2[1], 8.0);
    }

    #[test]
    fn dangling_line_is_ignored() {
        let reg = load_str("1 2\n3 4\n9 9 9\n").unwrap();
        assert_eq!(reg.sizes().collect::<Vec<_>>(), vec![2]);
        assert!(!reg.contains(3));
    }

    #[test]
    fn dangling_line_is_not_parsed() {
        let reg = load_str("1 2\n3 4\nnot numbers").unwrap();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_registry() {
        assert!(load_str("").unwrap().is_empty());
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        let reg = load_str("1.5 2.5\r\n-3e1 4\r\n").unwrap();
        assert_eq!(&*reg.flat(2).unwrap().v2, &[-30.0, 4.0]);

        let reg = load_str("1 2\n3 4").unwrap();
        assert!(reg.contains(2));
    }

    #[test]
    fn trailing_space_is_tolerated() {
        let reg = load_str("1 2 \n3 4  \n").unwrap();
        assert_eq!(&*reg.flat(2).unwrap().v1, &[1.0, 2.0]);
    }

    #[test]
    fn doubled_or_leading_space_is_malformed() {
        assert!(matches!(
            load_str("1  2\n3 4\n"),
            Err(LoadError::InvalidNumber { column: 1, .. })
        ));
        assert!(matches!(
            load_str(" 1 2\n3 4\n"),
            Err(LoadError::InvalidNumber { column: 0, .. })
        ));
    }

    #[test]
    fn blank_line_is_malformed() {
        assert!(matches!(
            load_str("1 2\n\n"),
            Err(LoadError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn mismatched_lengths_are_kept_as_is() {
        let reg = load_str("1 2 3\n4 5\n").unwrap();
        let flat = reg.flat(3).unwrap();
        assert_eq!(flat.v2.len(), 2);
        assert_eq!(reg.sequences(3).unwrap().v2.len(), 2);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0").unwrap();
        writeln!(file, "3 4").unwrap();

        let reg = load_file(file.path()).unwrap();
        assert_eq!(&*reg.flat(2).unwrap().v2, &[3.0, 4.0]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.in")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"1 2\n\xff\xfe\n";
        let err = load_reader(bytes).unwrap_err();
        assert!(matches!(err, LoadError::Io { line: 2, .. }));
    }

    #[test]
    fn embedded_dataset_loads() {
        let reg = load_embedded().unwrap();
        assert!(reg.contains(10));
        assert!(reg.contains(30));
    }
}
