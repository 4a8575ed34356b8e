//! # gym-table
//!
//! Fixed-width pipe-table layout for plain-text member files.
//!
//! ## Scope
//!
//! This crate handles HOW a table is laid out:
//! - Text fitting (ellipsis truncation, padding, cell sanitizing)
//! - Table building (borders, banners, header rows, data rows, footers)
//! - Splitting a written row back into trimmed cells
//!
//! WHAT goes into a table (member columns, schemas, row parsing) stays in
//! application code (`gym-desk::storage`).
//!
//! ## Example
//!
//! ```
//! use gym_table::{Cell, Column, TableBuilder};
//!
//! const COLUMNS: [Column; 2] = [Column::new("ID", 5), Column::new("Name", 15)];
//!
//! let mut table = TableBuilder::new(40);
//! table.border();
//! table.header(&COLUMNS);
//! table.row(&COLUMNS, &[Cell::number("1"), Cell::text("Alice")]);
//! table.border();
//!
//! let text = table.finalize();
//! assert!(text.contains("| 1     | Alice           |"));
//! ```

mod error;
mod table;
mod text;

// Re-exports
pub use error::{TableError, TableResult};
pub use table::{Cell, Column, TableBuilder, is_border, split_row, split_row_exact};
pub use text::{ELLIPSIS, fit, pad_right, sanitize_cell, text_width, truncate_with_ellipsis};
