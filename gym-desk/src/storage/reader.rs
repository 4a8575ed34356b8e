//! Member file reader
//!
//! Tolerant line scanner: rows that cannot be parsed are skipped with a
//! warning and the rest of the file still loads.

use gym_table::{TableError, is_border, split_row_exact};
use shared::models::{
    MemberProfile, PlanTier, PremiumMember, PremiumSnapshot, RegularMember, RegularSnapshot,
    UNSPECIFIED_GENDER,
};
use thiserror::Error;

use super::schema::{PREMIUM_SCHEMA, REGULAR_SCHEMA, TableSchema, parse_status};

/// Why a data row was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error(transparent)]
    Layout(#[from] TableError),

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown plan: {0:?}")]
    UnknownPlan(String),

    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
}

/// Members parsed from one file, plus the number of rows skipped
#[derive(Debug, Clone)]
pub struct ParsedTable<T> {
    pub members: Vec<T>,
    pub skipped: usize,
}

/// Parse the regular member file
pub fn parse_regular(text: &str) -> ParsedTable<RegularMember> {
    parse_table(text, &REGULAR_SCHEMA, parse_regular_row)
}

/// Parse the premium member file
pub fn parse_premium(text: &str) -> ParsedTable<PremiumMember> {
    parse_table(text, &PREMIUM_SCHEMA, parse_premium_row)
}

fn parse_table<T>(
    text: &str,
    schema: &TableSchema,
    parse_row: impl Fn(&[String]) -> Result<T, RowError>,
) -> ParsedTable<T> {
    let mut members = Vec::new();
    let mut skipped = 0;
    let mut data_section = false;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() || is_border(line) {
            continue;
        }
        if schema.is_title(line) {
            data_section = false;
            continue;
        }
        if schema.is_header(line) || (!data_section && schema.is_legacy_header(line)) {
            data_section = true;
            continue;
        }
        if schema.is_footer(line) {
            data_section = false;
            continue;
        }
        if !data_section {
            continue;
        }

        let parsed = split_row_exact(line, schema.column_count())
            .map_err(RowError::from)
            .and_then(|cells| parse_row(cells.as_slice()));
        match parsed {
            Ok(member) => members.push(member),
            Err(e) => {
                skipped += 1;
                tracing::warn!(
                    kind = %schema.kind,
                    line = index + 1,
                    error = %e,
                    "Skipping malformed member row"
                );
            }
        }
    }

    ParsedTable { members, skipped }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, cell: &str) -> Result<T, RowError> {
    cell.parse().map_err(|_| RowError::InvalidNumber {
        field,
        value: cell.to_string(),
    })
}

/// Currency cells may carry a leading `£`
fn parse_currency(field: &'static str, cell: &str) -> Result<f64, RowError> {
    let value: f64 = parse_number(field, cell.trim_start_matches('£').trim())?;
    if !value.is_finite() {
        return Err(RowError::InvalidNumber {
            field,
            value: cell.to_string(),
        });
    }
    Ok(value)
}

fn parse_plan(cell: &str) -> Result<PlanTier, RowError> {
    PlanTier::parse(cell).ok_or_else(|| RowError::UnknownPlan(cell.to_string()))
}

fn parse_active(cell: &str) -> Result<bool, RowError> {
    parse_status(cell).ok_or_else(|| RowError::UnknownStatus(cell.to_string()))
}

fn parse_regular_row(cells: &[String]) -> Result<RegularMember, RowError> {
    let [id, name, location, phone, email, start_date, plan, price, attendance, status] = cells
    else {
        return Err(TableError::ColumnCount {
            expected: REGULAR_SCHEMA.column_count(),
            found: cells.len(),
        }
        .into());
    };

    let snapshot = RegularSnapshot {
        profile: MemberProfile {
            id: parse_number("id", id)?,
            name: name.clone(),
            location: location.clone(),
            phone: phone.clone(),
            email: email.clone(),
            gender: UNSPECIFIED_GENDER.to_string(),
            date_of_birth: String::new(),
            membership_start_date: start_date.clone(),
        },
        plan: parse_plan(plan)?,
        price: parse_currency("price", price)?,
        attendance: parse_number("attendance", attendance)?,
        active: parse_active(status)?,
    };
    Ok(RegularMember::from_snapshot(snapshot))
}

fn parse_premium_row(cells: &[String]) -> Result<PremiumMember, RowError> {
    let [id, name, location, phone, trainer, start_date, plan, charge, points, status] = cells
    else {
        return Err(TableError::ColumnCount {
            expected: PREMIUM_SCHEMA.column_count(),
            found: cells.len(),
        }
        .into());
    };

    let snapshot = PremiumSnapshot {
        profile: MemberProfile {
            id: parse_number("id", id)?,
            name: name.clone(),
            location: location.clone(),
            phone: phone.clone(),
            email: String::new(),
            gender: UNSPECIFIED_GENDER.to_string(),
            date_of_birth: String::new(),
            membership_start_date: start_date.clone(),
        },
        personal_trainer: trainer.clone(),
        plan: parse_plan(plan)?,
        premium_charge: parse_currency("charge", charge)?,
        loyalty_points: parse_currency("points", points)?,
        active: parse_active(status)?,
    };
    Ok(PremiumMember::from_snapshot(snapshot))
}
