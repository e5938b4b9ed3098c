use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManuscriptError {
    #[error("Invalid chapter marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No chapter markers configured")]
    NoMarkers,
}

/// Rejected manual split. The chapter list is left unchanged.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("No chapter at position {index} (there are {count} chapters)")]
    NoSuchChapter { index: usize, count: usize },

    #[error("Enter the line number to split at (1 or higher)")]
    MissingLine,

    #[error("Chapter has only {total} line(s) and cannot be split")]
    TooShort { total: usize },

    #[error(
        "Line {line} is out of range: chapter has {total} lines, pick a line between 1 and {}",
        .total - 1
    )]
    LineOutOfRange { line: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, ManuscriptError>;
