use crate::models::CarRecord;
use crate::sources::FilterMapping;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing message produced while answering a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A car that survived the limiter, with its image if one was found
#[derive(Debug, Clone, Serialize)]
pub struct CarMatch {
    pub car: CarRecord,
    pub image: Option<PathBuf>,
}

/// Everything the view needs to show the outcome of one search
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub source: &'static str,
    pub filters: FilterMapping,
    pub requests: usize,
    pub total_found: usize,
    pub notices: Vec<Notice>,
    pub matches: Vec<CarMatch>,
}
