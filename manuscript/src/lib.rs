//! Manuscript ingestion core: line reflow and chapter segmentation.
//!
//! Raw text flows through two pure stages:
//! - [`reflow`] re-wraps ragged lines to a fixed width, keeping blank lines
//! - [`Segmenter`] splits the result into titled chapters, trying chapter
//!   marker keywords first and blank-line runs second
//!
//! [`split_at`] divides one chapter in two at a line number, and
//! [`EditSession`] threads the chapter list and cursor through both.

pub mod chapter;
pub mod config;
pub mod error;
pub mod reflow;
pub mod segment;
pub mod session;
pub mod split;

pub use chapter::ChapterRecord;
pub use config::{LabelSet, MarkerPattern, SegmenterConfig, default_markers};
pub use error::{ManuscriptError, Result, SplitError};
pub use reflow::{DEFAULT_MAX_WIDTH, reflow, reflow_optional};
pub use segment::{Method, SegmentOutcome, Segmentation, Segmenter, segment};
pub use session::{EditSession, Notice, NoticeLevel, SessionObserver};
pub use split::{split_at, split_at_with_labels};
