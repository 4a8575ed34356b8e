//! Member Store
//!
//! Persists the roster as two plain-text pipe tables, one per member kind.
//!
//! # Files
//!
//! ```text
//! <work_dir>/
//! ├── regular_members.txt
//! └── premium_members.txt
//! ```
//!
//! Saving overwrites both files with the whole roster. Loading replaces the
//! roster with whatever both files contain. Each file succeeds or fails on
//! its own. The format keeps only the columns of [`schema`], so a save/load
//! cycle drops everything else (see the snapshot types in
//! `shared::models`).

pub mod reader;
pub mod schema;
pub mod writer;

pub use reader::{ParsedTable, RowError, parse_premium, parse_regular};
pub use schema::{PREMIUM_SCHEMA, REGULAR_SCHEMA, SCHEMA_VERSION, TableSchema};
pub use writer::{render_premium, render_regular};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Member;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::Config;
use crate::roster::Roster;

/// Outcome of writing one file
#[derive(Debug)]
pub struct FileSave {
    pub path: PathBuf,
    /// Number of members written
    pub result: AppResult<usize>,
}

/// Outcome of a save
#[derive(Debug)]
pub struct SaveReport {
    pub regular: FileSave,
    pub premium: FileSave,
}

impl SaveReport {
    pub fn is_success(&self) -> bool {
        self.regular.result.is_ok() && self.premium.result.is_ok()
    }
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            writeln!(f, "Data saved successfully!")?;
        } else {
            writeln!(f, "Data saved with errors:")?;
        }
        for (label, file) in [("Regular members", &self.regular), ("Premium members", &self.premium)] {
            match &file.result {
                Ok(count) => writeln!(f, "{label}: {count} saved to {}", file.path.display())?,
                Err(e) => writeln!(f, "{label}: {e}")?,
            }
        }
        Ok(())
    }
}

/// Outcome of reading one file
#[derive(Debug)]
pub enum FileLoad {
    Loaded { count: usize, skipped: usize },
    Missing,
    Failed(AppError),
}

impl fmt::Display for FileLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { count, skipped: 0 } => write!(f, "{count} loaded"),
            Self::Loaded { count, skipped } => {
                write!(f, "{count} loaded, {skipped} malformed rows skipped")
            }
            Self::Missing => f.write_str("File not found"),
            Self::Failed(e) => write!(f, "{e}"),
        }
    }
}

/// Outcome of a load
#[derive(Debug)]
pub struct LoadReport {
    pub regular: FileLoad,
    pub premium: FileLoad,
    /// Members in the roster after loading
    pub total: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data loading complete:")?;
        writeln!(f)?;
        writeln!(f, "Regular Members: {}", self.regular)?;
        writeln!(f, "Premium Members: {}", self.premium)?;
        writeln!(f)?;
        write!(f, "Total Members Loaded: {}", self.total)
    }
}

/// Two-file member store
#[derive(Debug, Clone)]
pub struct MemberStore {
    regular_path: PathBuf,
    premium_path: PathBuf,
}

impl MemberStore {
    pub fn new(regular_path: impl Into<PathBuf>, premium_path: impl Into<PathBuf>) -> Self {
        Self {
            regular_path: regular_path.into(),
            premium_path: premium_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.regular_db_path(), config.premium_db_path())
    }

    pub fn regular_path(&self) -> &Path {
        &self.regular_path
    }

    pub fn premium_path(&self) -> &Path {
        &self.premium_path
    }

    /// Write both files from the roster
    ///
    /// An empty roster is refused so existing files are never blanked.
    pub fn save(&self, roster: &Roster) -> AppResult<SaveReport> {
        if roster.is_empty() {
            return Err(AppError::new(ErrorCode::RosterEmpty));
        }

        let regular = FileSave {
            path: self.regular_path.clone(),
            result: write_file(&self.regular_path, &render_regular(roster.regulars()))
                .map(|()| roster.regulars().count()),
        };
        let premium = FileSave {
            path: self.premium_path.clone(),
            result: write_file(&self.premium_path, &render_premium(roster.premiums()))
                .map(|()| roster.premiums().count()),
        };
        Ok(SaveReport { regular, premium })
    }

    /// Replace the roster with the contents of both files
    pub fn load(&self, roster: &mut Roster) -> LoadReport {
        roster.clear();

        let (regular, regulars) = read_file(&self.regular_path, parse_regular);
        let (premium, premiums) = read_file(&self.premium_path, parse_premium);

        let members = regulars
            .into_iter()
            .map(Member::from)
            .chain(premiums.into_iter().map(Member::from));
        let total = roster.replace_all(members);

        tracing::info!(total, "Members loaded");
        LoadReport {
            regular,
            premium,
            total,
        }
    }
}

fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AppError::storage_write(path, &e))?;
    }
    match std::fs::write(path, contents) {
        Ok(()) => {
            tracing::info!(path = %path.display(), bytes = contents.len(), "Member file written");
            Ok(())
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to write member file");
            Err(AppError::storage_write(path, &e))
        }
    }
}

fn read_file<T>(path: &Path, parse: fn(&str) -> ParsedTable<T>) -> (FileLoad, Vec<T>) {
    if !path.exists() {
        tracing::info!(path = %path.display(), "Member file not found");
        return (FileLoad::Missing, Vec::new());
    }
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let parsed = parse(&text);
            let status = FileLoad::Loaded {
                count: parsed.members.len(),
                skipped: parsed.skipped,
            };
            (status, parsed.members)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read member file");
            (FileLoad::Failed(AppError::storage_read(path, &e)), Vec::new())
        }
    }
}
