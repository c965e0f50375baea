//! Reading quiver matrices from text streams, one per line.

use crate::matrix::{MatrixError, QuiverMatrix};
use std::io::BufRead;

/// A matrix read from a stream, with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Line number in the input.
    pub line: usize,
    /// The parsed matrix.
    pub matrix: QuiverMatrix,
}

/// Error raised while reading a stream.
#[derive(Debug)]
pub enum StreamError {
    /// The underlying reader failed.
    Io {
        /// Line being read.
        line: usize,
        /// Reader error.
        source: std::io::Error,
    },
    /// A line does not hold a valid matrix.
    Parse {
        /// Offending line.
        line: usize,
        /// Parser error.
        source: MatrixError,
    },
}

impl StreamError {
    /// Line at which the error occurred.
    pub fn line(&self) -> usize {
        match self {
            StreamError::Io { line, .. } | StreamError::Parse { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::Io { line, source } => {
                write!(f, "read error at line {}: {}", line, source)
            }
            StreamError::Parse { line, source } => {
                write!(f, "malformed matrix at line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io { source, .. } => Some(source),
            StreamError::Parse { source, .. } => Some(source),
        }
    }
}

/// Iterator over the matrices in a line-oriented text stream.
///
/// Blank lines and lines starting with `#` are skipped. After the first error the
/// stream yields nothing more.
pub struct MatrixStream<R> {
    reader: R,
    line: usize,
    buf: String,
    failed: bool,
}

impl<R: BufRead> MatrixStream<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for MatrixStream<R> {
    type Item = Result<Record, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buf.clear();
            self.line += 1;
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    self.failed = true;
                    return Some(Err(StreamError::Io {
                        line: self.line,
                        source,
                    }));
                }
            }
            let text = self.buf.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(match text.parse::<QuiverMatrix>() {
                Ok(matrix) => Ok(Record {
                    line: self.line,
                    matrix,
                }),
                Err(source) => {
                    self.failed = true;
                    Err(StreamError::Parse {
                        line: self.line,
                        source,
                    })
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# quivers\n\n{ { 0 1 } { -1 0 } }\n   \n{ { 0 -1 } { 1 0 } }\n";
        let records: Vec<Record> = MatrixStream::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 3);
        assert_eq!(records[1].line, 5);
        assert_eq!(records[1].matrix.get(0, 1), -1);
    }

    #[test]
    fn last_line_without_newline() {
        let mut stream = MatrixStream::new(Cursor::new("{ { 0 2 } { -2 0 } }"));
        assert_eq!(stream.next().unwrap().unwrap().matrix.get(0, 1), 2);
        assert!(stream.next().is_none());
    }

    #[test]
    fn parse_error_stops_the_stream() {
        let input = "{ { 0 1 } { -1 0 } }\n{ { 0 1 } { 1 0 } }\n{ { 0 1 } { -1 0 } }\n";
        let mut stream = MatrixStream::new(Cursor::new(input));
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(matches!(
            err,
            StreamError::Parse {
                source: MatrixError::NotSkewSymmetric { .. },
                ..
            }
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let mut stream = MatrixStream::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(err, StreamError::Io { line: 1, .. }));
    }
}
