//! Title rules.
//!
//! A title is checked after trimming surrounding whitespace (a stray byte
//! order mark counts as whitespace): it must not be empty and must be at most
//! [`MAX_TITLE_CHARS`] characters long. Length is counted in Unicode scalar
//! values, so `買い物` is three characters and an emoji is one.
//!
//! Validation never hands back the trimmed string; storing the trimmed form
//! is the job of [`crate::lifecycle`].

use thiserror::Error;

pub const MAX_TITLE_CHARS: usize = 100;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("タイトルは必須です")]
    TitleRequired,

    #[error("タイトルは100文字以内で入力してください")]
    TitleTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleValidation {
    error: Option<ValidationError>,
}

impl TitleValidation {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

const BOM: char = '\u{FEFF}';

/// `raw` without surrounding whitespace or byte order marks.
pub fn trim_title(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

pub fn validate_title(raw: &str) -> TitleValidation {
    let trimmed = trim_title(raw);
    let error = if trimmed.is_empty() {
        Some(ValidationError::TitleRequired)
    } else if trimmed.chars().count() > MAX_TITLE_CHARS {
        Some(ValidationError::TitleTooLong)
    } else {
        None
    };
    TitleValidation { error }
}
