use thiserror::Error;

use crate::grade_scale::Rank;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown grade: {0:?}")]
    UnknownGrade(String),

    #[error("no grade for rank {0}")]
    UnknownRank(Rank),

    #[error("duplicate grade label: {0:?}")]
    DuplicateLabel(String),

    #[error("duplicate grade rank: {0}")]
    DuplicateRank(Rank),

    #[error("logbook has no entries")]
    EmptyLogbook,

    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid rank {value:?}")]
    InvalidRank { line: u64, value: String },

    #[error("line {line}: invalid attempt count {value:?}")]
    InvalidAttempts { line: u64, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
