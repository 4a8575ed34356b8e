//! Pipe-table builder and row splitter
//!
//! Provides a fluent API for building fixed-width tables of the form:
//!
//! ```text
//! +--------------------+
//! |   TITLE            |
//! +--------------------+
//! | ID    | Name       |
//! +--------------------+
//! | 1     | Alice      |
//! +--------------------+
//! | Total: 1           |
//! +--------------------+
//! ```

use crate::error::{TableError, TableResult};
use crate::text::{fit, pad_right, sanitize_cell};

/// A table column: header title and content width in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(title: &'static str, width: usize) -> Self {
        Self { title, width }
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Free text: sanitized, truncated with an ellipsis, padded
    Text(String),
    /// Pre-formatted number: padded only, never truncated
    Number(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn number(s: impl Into<String>) -> Self {
        Self::Number(s.into())
    }

    fn render(&self, width: usize) -> String {
        match self {
            Self::Text(s) => fit(&sanitize_cell(s), width),
            Self::Number(s) => pad_right(s, width),
        }
    }
}

/// String-based table builder
///
/// `width` is the inner width of the border line (the number of `-`
/// between the two `+`).
pub struct TableBuilder {
    buf: String,
    width: usize,
}

impl TableBuilder {
    /// Create a new builder with the specified border width in characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    // === Text Output ===

    /// Write a raw line
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    // === Structure ===

    /// Print a `+---+` border line
    pub fn border(&mut self) -> &mut Self {
        let line = self.border_str();
        self.write_line(&line)
    }

    /// Get the border line string
    pub fn border_str(&self) -> String {
        format!("+{}+", "-".repeat(self.width))
    }

    /// Print a title banner, indented by `indent` spaces and padded to the
    /// border width
    pub fn banner(&mut self, title: &str, indent: usize) -> &mut Self {
        let content = format!("{}{}", " ".repeat(indent), title);
        let line = format!("|{}|", fit(&content, self.width));
        self.write_line(&line)
    }

    /// Write an empty line
    pub fn blank_line(&mut self) -> &mut Self {
        self.write_line("")
    }

    /// Print the column header row
    pub fn header(&mut self, columns: &[Column]) -> &mut Self {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| pad_right(c.title, c.width))
            .collect();
        let line = join_cells(&cells);
        self.write_line(&line)
    }

    /// Print a data row
    ///
    /// Cells are matched to columns by position. Missing cells render
    /// empty, extra cells are ignored.
    pub fn row(&mut self, columns: &[Column], cells: &[Cell]) -> &mut Self {
        let rendered: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| match cells.get(i) {
                Some(cell) => cell.render(col.width),
                None => " ".repeat(col.width),
            })
            .collect();
        let line = join_cells(&rendered);
        self.write_line(&line)
    }

    /// Print a single-cell footer padded to `label_width`
    pub fn footer(&mut self, label: &str, label_width: usize) -> &mut Self {
        let line = format!("| {} |", pad_right(label, label_width));
        self.write_line(&line)
    }

    // === Build ===

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        tracing::trace!(bytes = self.buf.len(), "table finalized");
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

fn join_cells(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Check whether a line is a `+---+` border
pub fn is_border(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2
        && line.starts_with('+')
        && line.ends_with('+')
        && line.chars().all(|c| c == '+' || c == '-')
}

/// Split a `| a | b |` row into its trimmed cells
pub fn split_row(line: &str) -> TableResult<Vec<String>> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
        .ok_or_else(|| TableError::NotARow(trimmed.to_string()))?;
    Ok(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

/// Split a row and require exactly `expected` cells
pub fn split_row_exact(line: &str, expected: usize) -> TableResult<Vec<String>> {
    let cells = split_row(line)?;
    if cells.len() != expected {
        return Err(TableError::ColumnCount {
            expected,
            found: cells.len(),
        });
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [Column; 3] = [
        Column::new("ID", 5),
        Column::new("Name", 8),
        Column::new("Price", 7),
    ];

    #[test]
    fn test_border() {
        let mut b = TableBuilder::new(10);
        b.border();
        assert_eq!(b.as_str(), "+----------+\n");
    }

    #[test]
    fn test_banner_padded_to_border() {
        let mut b = TableBuilder::new(20);
        b.banner("TITLE", 3);
        assert_eq!(b.as_str(), "|   TITLE            |\n");
        assert_eq!(b.as_str().trim_end().len(), b.border_str().len());
    }

    #[test]
    fn test_header_and_row() {
        let mut b = TableBuilder::new(30);
        b.header(&COLUMNS);
        b.row(
            &COLUMNS,
            &[Cell::number("1"), Cell::text("Alice"), Cell::number("6500.00")],
        );
        let text = b.finalize();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| ID    | Name     | Price   |");
        assert_eq!(lines[1], "| 1     | Alice    | 6500.00 |");
    }

    #[test]
    fn test_row_truncates_text_but_not_numbers() {
        let mut b = TableBuilder::new(30);
        b.row(
            &COLUMNS,
            &[
                Cell::number("123456"),
                Cell::text("Bartholomew"),
                Cell::number("100000.00"),
            ],
        );
        assert_eq!(b.as_str(), "| 123456 | Barth... | 100000.00 |\n");
    }

    #[test]
    fn test_row_sanitizes_pipes() {
        let mut b = TableBuilder::new(30);
        b.row(&COLUMNS, &[Cell::number("1"), Cell::text("a|b")]);
        let cells = split_row(b.as_str()).unwrap();
        assert_eq!(cells, vec!["1", "a/b", ""]);
    }

    #[test]
    fn test_footer() {
        let mut b = TableBuilder::new(30);
        b.footer("Total: 2", 12);
        assert_eq!(b.as_str(), "| Total: 2     |\n");
    }

    #[test]
    fn test_is_border() {
        assert!(is_border("+-----+"));
        assert!(is_border("  +--+  "));
        assert!(!is_border("| a |"));
        assert!(!is_border(""));
        assert!(!is_border("+"));
    }

    #[test]
    fn test_split_row() {
        assert_eq!(
            split_row("| 1     | Alice    |  x |").unwrap(),
            vec!["1", "Alice", "x"]
        );
        assert!(matches!(split_row("no pipes"), Err(TableError::NotARow(_))));
    }

    #[test]
    fn test_split_row_exact() {
        assert!(split_row_exact("| a | b |", 2).is_ok());
        assert_eq!(
            split_row_exact("| a | b |", 3),
            Err(TableError::ColumnCount {
                expected: 3,
                found: 2
            })
        );
    }
}
