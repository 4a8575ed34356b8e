//! Member file schemas
//!
//! Each member file is one pipe table. The schema fixes the column order,
//! titles and widths, plus the banner and footer text.

use gym_table::{Column, split_row};
use shared::models::MemberKind;

/// Version of the column layout written by this crate
pub const SCHEMA_VERSION: u32 = 1;

/// Number of `-` between the two `+` of a border line
pub const BORDER_WIDTH: usize = 171;

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_INACTIVE: &str = "Inactive";

const REGULAR_COLUMNS: [Column; 10] = [
    Column::new("ID", 5),
    Column::new("Name", 15),
    Column::new("Location", 12),
    Column::new("Phone", 10),
    Column::new("Email", 20),
    Column::new("Start Date", 15),
    Column::new("Plan", 8),
    Column::new("Price(£)", 7),
    Column::new("Att.", 5),
    Column::new("Status", 8),
];

const PREMIUM_COLUMNS: [Column; 10] = [
    Column::new("ID", 5),
    Column::new("Name", 15),
    Column::new("Location", 12),
    Column::new("Phone", 10),
    Column::new("Trainer", 15),
    Column::new("Start Date", 15),
    Column::new("Plan", 8),
    Column::new("Charge(£)", 10),
    Column::new("Points", 7),
    Column::new("Status", 7),
];

/// Declared layout of one member file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub version: u32,
    pub kind: MemberKind,
    pub title: &'static str,
    /// Spaces before the title inside the banner
    pub banner_indent: usize,
    pub columns: &'static [Column],
    /// Footer text before the member count
    pub footer_label: &'static str,
    pub footer_width: usize,
}

pub const REGULAR_SCHEMA: TableSchema = TableSchema {
    version: SCHEMA_VERSION,
    kind: MemberKind::Regular,
    title: "REGULAR MEMBERS LIST",
    banner_indent: 37,
    columns: &REGULAR_COLUMNS,
    footer_label: "Total Regular Members",
    footer_width: 83,
};

pub const PREMIUM_SCHEMA: TableSchema = TableSchema {
    version: SCHEMA_VERSION,
    kind: MemberKind::Premium,
    title: "PREMIUM MEMBERS LIST",
    banner_indent: 39,
    columns: &PREMIUM_COLUMNS,
    footer_label: "Total Premium Members",
    footer_width: 93,
};

impl TableSchema {
    pub fn for_kind(kind: MemberKind) -> &'static TableSchema {
        match kind {
            MemberKind::Regular => &REGULAR_SCHEMA,
            MemberKind::Premium => &PREMIUM_SCHEMA,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn footer(&self, count: usize) -> String {
        format!("{}: {}", self.footer_label, count)
    }

    pub fn is_title(&self, line: &str) -> bool {
        line.contains(self.title)
    }

    /// Exact header row: every cell equals its column title
    pub fn is_header(&self, line: &str) -> bool {
        split_row(line).is_ok_and(|cells| {
            cells.len() == self.columns.len()
                && cells.iter().zip(self.columns).all(|(cell, col)| cell == col.title)
        })
    }

    /// Header rows written by older layouts
    pub fn is_legacy_header(&self, line: &str) -> bool {
        line.contains("ID") && line.contains("Name") && line.contains("Location")
    }

    /// Any `Total ... Members:` footer row
    pub fn is_footer(&self, line: &str) -> bool {
        split_row(line).is_ok_and(|cells| {
            cells.len() == 1 && cells[0].starts_with("Total ") && cells[0].contains("Members:")
        })
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active { STATUS_ACTIVE } else { STATUS_INACTIVE }
}

/// Parse a status cell; `None` for anything other than the two labels
pub fn parse_status(cell: &str) -> Option<bool> {
    match cell {
        STATUS_ACTIVE => Some(true),
        STATUS_INACTIVE => Some(false),
        _ => None,
    }
}
