//! Error Types for Fund Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("Unknown fund category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Fund not found: {0}")]
    FundNotFound(String),

    #[error("Too many funds to compare: {requested} (max {max})")]
    TooManyFunds { requested: usize, max: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdvisorError {
    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRiskLevel(level) => format!(
                "'{level}' is not a recognised risk level. Use one of: Low, Low to Moderate, \
                 Moderate, Moderately High, High, Very High."
            ),
            Self::UnknownCategory(cat) => format!("'{cat}' is not a fund category."),
            Self::UnknownSortField(field) => format!("Cannot sort funds by '{field}'."),
            Self::FundNotFound(id) => format!("No fund with id '{id}'."),
            Self::TooManyFunds { max, .. } => format!("You can compare at most {max} funds."),
            _ => "An unexpected error occurred.".into(),
        }
    }
}
