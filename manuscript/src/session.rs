//! Editing session: the chapter list and current position for one ingestion.

use crate::chapter::ChapterRecord;
use crate::error::SplitError;
use crate::reflow::{reflow, DEFAULT_MAX_WIDTH};
use crate::segment::{Method, SegmentOutcome, Segmenter};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A user-facing status message raised by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Hooks for a front end that renders the session.
///
/// All methods default to doing nothing, so implementors pick what they need.
pub trait SessionObserver {
    /// The whole chapter list was replaced by a new segmentation.
    fn chapters_replaced(&mut self, _chapters: &[ChapterRecord], _outcome: SegmentOutcome) {}

    /// A chapter was split; `current` is the index of the new second part.
    fn chapter_split(&mut self, _chapters: &[ChapterRecord], _current: usize) {}

    /// A status or validation message for the user.
    fn notice(&mut self, _notice: &Notice) {}
}

/// Chapter list and cursor for one editing session.
pub struct EditSession {
    segmenter: Segmenter,
    max_width: usize,
    chapters: Vec<ChapterRecord>,
    current_index: usize,
    observer: Option<Box<dyn SessionObserver>>,
}

impl EditSession {
    /// Create an empty session.
    pub fn new(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            max_width: DEFAULT_MAX_WIDTH,
            chapters: Vec::new(),
            current_index: 0,
            observer: None,
        }
    }

    /// Set the reflow width used by [`ingest`](Self::ingest).
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Attach an observer.
    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Start a session from an existing chapter list (e.g. a saved one).
    pub fn with_chapters(mut self, chapters: Vec<ChapterRecord>) -> Self {
        self.chapters = chapters;
        self.current_index = 0;
        self
    }

    /// Reflow and segment `raw`, replacing the chapter list.
    pub fn ingest(&mut self, raw: &str, method: Method) -> SegmentOutcome {
        let text = reflow(raw, self.max_width);
        let segmentation = self.segmenter.segment(&text, method);

        self.chapters = segmentation.chapters;
        self.current_index = 0;

        let outcome = segmentation.outcome;
        log::info!("{}", outcome.describe());

        if let Some(observer) = self.observer.as_mut() {
            observer.chapters_replaced(&self.chapters, outcome);
            observer.notice(&Notice::info(outcome.describe()));
        }

        outcome
    }

    /// Split the current chapter after `line_number` lines.
    ///
    /// On success the cursor moves to the second part. On failure the session
    /// is unchanged and the observer receives a warning.
    pub fn split_current(
        &mut self,
        line_number: usize,
        new_title: Option<&str>,
    ) -> Result<(), SplitError> {
        match self
            .segmenter
            .split_at(&self.chapters, self.current_index, line_number, new_title)
        {
            Ok(chapters) => {
                self.chapters = chapters;
                self.current_index += 1;
                if let Some(observer) = self.observer.as_mut() {
                    observer.chapter_split(&self.chapters, self.current_index);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("split not performed: {}", err);
                if let Some(observer) = self.observer.as_mut() {
                    observer.notice(&Notice::warning(err.to_string()));
                }
                Err(err)
            }
        }
    }

    /// Move the cursor to `index`.
    pub fn select(&mut self, index: usize) -> Result<(), SplitError> {
        if index >= self.chapters.len() {
            return Err(SplitError::NoSuchChapter {
                index,
                count: self.chapters.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    pub fn chapters(&self) -> &[ChapterRecord] {
        &self.chapters
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The chapter under the cursor, if any.
    pub fn current(&self) -> Option<&ChapterRecord> {
        self.chapters.get(self.current_index)
    }

    /// Hand the chapter list over, ending the session.
    pub fn into_chapters(self) -> Vec<ChapterRecord> {
        self.chapters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SegmenterConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SessionObserver for Recorder {
        fn chapters_replaced(&mut self, chapters: &[ChapterRecord], _outcome: SegmentOutcome) {
            self.events
                .borrow_mut()
                .push(format!("replaced:{}", chapters.len()));
        }

        fn chapter_split(&mut self, chapters: &[ChapterRecord], current: usize) {
            self.events
                .borrow_mut()
                .push(format!("split:{}:{}", chapters.len(), current));
        }

        fn notice(&mut self, notice: &Notice) {
            self.events
                .borrow_mut()
                .push(format!("{:?}:{}", notice.level, notice.message));
        }
    }

    fn session() -> EditSession {
        EditSession::new(Segmenter::new(SegmenterConfig::default()).unwrap())
    }

    #[test]
    fn test_ingest_replaces_chapters() {
        let mut session = session();
        let outcome = session.ingest("Chapter 1\r\nOne\r\nChapter 2\r\nTwo", Method::Keyword);
        assert_eq!(outcome, SegmentOutcome::Markers { count: 2 });
        assert_eq!(session.chapters().len(), 2);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current().unwrap().content, "One");
    }

    #[test]
    fn test_ingest_reflows_to_width() {
        let mut session = session().with_max_width(10);
        session.ingest("alpha beta gamma delta", Method::Keyword);
        assert_eq!(session.chapters()[0].content, "alpha beta\ngamma\ndelta");
    }

    #[test]
    fn test_split_current_moves_cursor() {
        let mut session = session().with_chapters(vec![
            ChapterRecord::new("A", "a1\na2\na3"),
            ChapterRecord::new("B", "b"),
        ]);
        session.split_current(1, Some("First")).unwrap();
        assert_eq!(session.chapters().len(), 3);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current().unwrap().title, "Remaining Content");

        session.split_current(1, None).unwrap();
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.chapters()[1].title, "Chapter 2");
        assert_eq!(session.current().unwrap().content, "a3");
    }

    #[test]
    fn test_failed_split_leaves_session_unchanged() {
        let mut session = session().with_chapters(vec![ChapterRecord::new("A", "a1\na2")]);
        let err = session.split_current(5, None).unwrap_err();
        assert_eq!(err, SplitError::LineOutOfRange { line: 5, total: 2 });
        assert_eq!(session.chapters().len(), 1);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_observer_receives_events() {
        let recorder = Recorder::default();
        let events = recorder.events.clone();
        let mut session = session().with_observer(Box::new(recorder));

        session.ingest("plain text\nsecond line", Method::Keyword);
        session.split_current(1, None).unwrap();
        let _ = session.split_current(9, None);

        let events = events.borrow();
        assert_eq!(events[0], "replaced:1");
        assert!(events[1].starts_with("Info:No chapter markers found"));
        assert_eq!(events[2], "split:2:1");
        assert!(events[3].starts_with("Warning:"));
    }

    #[test]
    fn test_select() {
        let mut session = session().with_chapters(vec![
            ChapterRecord::new("A", "a"),
            ChapterRecord::new("B", "b"),
        ]);
        session.select(1).unwrap();
        assert_eq!(session.current().unwrap().title, "B");
        assert!(session.select(2).is_err());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.into_chapters().len(), 2);
    }
}
