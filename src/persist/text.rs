//! The delimited text format.
//!
//! One line per vertex: the vertex id followed by `dest;weight` pairs for each
//! outgoing edge, all separated by the configured separator:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! 1;2;10;3;5
//! 2
//! 3
//! ```
//!
//! Destinations that never get their own line are created when the edge is
//! inserted, after all declared vertices.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use super::error::{ParseErrorKind, PersistError};
use crate::graph::{Edge, LinkedGraph, VertexId, VertexRecord};

/// Separator between fields on a line.
pub const DEFAULT_SEPARATOR: char = ';';

/// Marker that starts a comment line.
pub const DEFAULT_COMMENT: char = '#';

/// Settings for reading and writing the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    /// Character between fields.
    pub separator: char,
    /// Lines whose first non-blank character is this are ignored.
    pub comment: char,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            comment: DEFAULT_COMMENT,
        }
    }
}

impl TextFormat {
    /// Returns a copy using `separator` between fields.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Parses text into vertex records, one per declared vertex.
    ///
    /// # Errors
    /// [`PersistError::Parse`] with the offending line number.
    pub fn parse_records(&self, input: &str) -> Result<Vec<VertexRecord>, PersistError> {
        let mut parser = LineParser::new(*self);
        for (idx, line) in input.lines().enumerate() {
            parser.feed(idx + 1, line)?;
        }
        Ok(parser.records)
    }

    /// Parses text into a graph.
    ///
    /// # Errors
    /// [`PersistError::Parse`] for malformed input, [`PersistError::Graph`] if
    /// the graph cannot hold the records.
    pub fn parse(&self, input: &str) -> Result<LinkedGraph, PersistError> {
        let records = self.parse_records(input)?;
        Ok(LinkedGraph::from_records(records)?)
    }

    /// Reads a graph line by line from `reader`.
    ///
    /// # Errors
    /// As [`parse`](Self::parse), plus [`PersistError::Io`] on read failure.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<LinkedGraph, PersistError> {
        let mut parser = LineParser::new(*self);
        for (idx, line) in reader.lines().enumerate() {
            parser.feed(idx + 1, &line?)?;
        }
        Ok(LinkedGraph::from_records(parser.records)?)
    }

    /// Renders `graph` as text, one line per vertex in insertion order.
    pub fn render(&self, graph: &LinkedGraph) -> String {
        let mut out = String::new();
        for vertex in graph {
            out.push_str(&vertex.id().to_string());
            for edge in vertex.edges() {
                out.push(self.separator);
                out.push_str(&edge.dest.to_string());
                out.push(self.separator);
                out.push_str(&edge.weight.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Writes the text form of `graph` to `writer`.
    ///
    /// # Errors
    /// [`PersistError::Io`] on write failure.
    pub fn write<W: Write>(&self, graph: &LinkedGraph, mut writer: W) -> Result<(), PersistError> {
        for vertex in graph {
            write!(writer, "{}", vertex.id())?;
            for edge in vertex.edges() {
                write!(writer, "{sep}{}{sep}{}", edge.dest, edge.weight, sep = self.separator)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Accumulates records across lines and tracks declared ids.
struct LineParser {
    format: TextFormat,
    records: Vec<VertexRecord>,
    declared: HashSet<VertexId>,
}

impl LineParser {
    fn new(format: TextFormat) -> Self {
        Self {
            format,
            records: Vec::new(),
            declared: HashSet::new(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), PersistError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(self.format.comment) {
            return Ok(());
        }
        let fail = |kind: ParseErrorKind| PersistError::Parse {
            line: line_no,
            kind,
        };

        let mut fields = line.split(self.format.separator).map(str::trim);
        let id = parse_id(fields.next().unwrap_or_default()).map_err(fail)?;
        if !self.declared.insert(id) {
            return Err(fail(ParseErrorKind::DuplicateVertex(id)));
        }

        let mut record = VertexRecord::new(id);
        while let Some(dest) = fields.next() {
            // A trailing separator leaves one empty field; tolerate it.
            if dest.is_empty() && fields.clone().next().is_none() {
                break;
            }
            let dest = parse_id(dest).map_err(fail)?;
            let weight = fields
                .next()
                .ok_or(ParseErrorKind::MissingWeight(dest))
                .and_then(parse_int)
                .map_err(fail)?;
            record.edges.push(Edge::new(dest, weight));
        }
        self.records.push(record);
        Ok(())
    }
}

fn parse_int(field: &str) -> Result<i32, ParseErrorKind> {
    field
        .parse()
        .map_err(|_| ParseErrorKind::InvalidInteger(field.to_owned()))
}

fn parse_id(field: &str) -> Result<VertexId, ParseErrorKind> {
    let id = parse_int(field)?;
    if id < 0 {
        return Err(ParseErrorKind::InvalidVertex(id));
    }
    Ok(id)
}
