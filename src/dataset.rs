use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use crate::error::StatsError;

/// Integers listed on one line of the input. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<i64>);

impl Record {
    pub fn tokens(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn max(&self) -> i64 {
        // records are never built empty
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Splits a stripped line on single spaces and parses every piece.
pub fn parse_record(line_no: usize, line: &str) -> Result<Record, StatsError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(StatsError::EmptyRecord { line: line_no });
    }
    line.split(' ')
        .map(|token| {
            parse_token(token).map_err(|source| StatsError::InvalidToken {
                line: line_no,
                token: token.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Record)
}

/// Parses one integer, allowing single `_` separators between digits (`1_000`).
fn parse_token(token: &str) -> Result<i64, ParseIntError> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    let separated = digits.contains('_')
        && digits
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if separated {
        token.replace('_', "").parse()
    } else {
        token.parse()
    }
}

/// Line-by-line reader over a dataset. Yields one record per line.
#[derive(Debug)]
pub struct Dataset<R> {
    path: PathBuf,
    lines: Lines<R>,
    line_no: usize,
}

impl Dataset<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Dataset<BufReader<File>>, StatsError> {
        let file = File::open(path).map_err(|source| StatsError::Io {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("opened dataset {}", path.display());
        Ok(Dataset::new(path, BufReader::new(file)))
    }
}

impl<R: BufRead> Dataset<R> {
    pub fn new(path: &Path, reader: R) -> Dataset<R> {
        Dataset {
            path: path.to_owned(),
            lines: reader.lines(),
            line_no: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: BufRead> Iterator for Dataset<R> {
    type Item = Result<Record, StatsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(match line {
            Ok(line) => parse_record(self.line_no, &line),
            Err(source) => Err(StatsError::Io {
                path: self.path.clone(),
                source,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn dataset(content: &str) -> Dataset<Cursor<&str>> {
        Dataset::new(Path::new("test.txt"), Cursor::new(content))
    }

    #[test]
    fn parses_space_separated_integers() {
        let record = parse_record(1, "1 2 3\n").unwrap();
        assert_eq!(record.tokens(), &[1, 2, 3]);
        assert_eq!(record.len(), 3);
        assert_eq!(record.max(), 3);
    }

    #[test]
    fn keeps_duplicate_tokens() {
        let record = parse_record(1, "1 1 1").unwrap();
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn accepts_signs_and_crlf() {
        let record = parse_record(1, "-4 +7 0\r\n").unwrap();
        assert_eq!(record.tokens(), &[-4, 7, 0]);
        assert_eq!(record.max(), 7);
    }

    #[test]
    fn rejects_non_numeric_token() {
        match parse_record(3, "1 a 3") {
            Err(StatsError::InvalidToken { line, token, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "a");
            }
            other => panic!("expected invalid token, got {:?}", other),
        }
    }

    #[test]
    fn rejects_double_space() {
        assert!(matches!(
            parse_record(1, "1  2"),
            Err(StatsError::InvalidToken { token, .. }) if token.is_empty()
        ));
    }

    #[test]
    fn rejects_tab_separated_tokens() {
        assert!(matches!(
            parse_record(1, "1\t2"),
            Err(StatsError::InvalidToken { .. })
        ));
    }

    #[test]
    fn accepts_digit_separators() {
        let record = parse_record(1, "1_000 -2_5 +3").unwrap();
        assert_eq!(record.tokens(), &[1000, -25, 3]);
    }

    #[test]
    fn rejects_misplaced_separators() {
        for line in ["_1", "1_", "1__0", "-_1", "1_a"] {
            assert!(
                matches!(parse_record(1, line), Err(StatsError::InvalidToken { .. })),
                "{:?} should not parse",
                line
            );
        }
    }

    #[test]
    fn rejects_blank_line() {
        assert!(matches!(
            parse_record(5, "   \n"),
            Err(StatsError::EmptyRecord { line: 5 })
        ));
    }

    #[test]
    fn rejects_out_of_range_integer() {
        assert!(matches!(
            parse_record(1, "99999999999999999999"),
            Err(StatsError::InvalidToken { .. })
        ));
    }

    #[test]
    fn iterates_records_in_order() {
        let records = dataset("1 2 3\n4 5\n")
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tokens(), &[1, 2, 3]);
        assert_eq!(records[1].tokens(), &[4, 5]);
    }

    #[test]
    fn last_line_without_newline() {
        let records = dataset("1\n2").collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn reports_line_number_of_bad_line() {
        let err = dataset("1 2\n3 4\n\n5\n")
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, StatsError::EmptyRecord { line: 3 }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dataset::open(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, StatsError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
