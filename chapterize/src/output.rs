//! Rendering chapter lists for files and the terminal.

use anyhow::{Context, Result};
use clap::ValueEnum;
use manuscript::ChapterRecord;
use std::io::Write;
use std::path::Path;

/// How chapter lists are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of {title, content}
    Json,
    /// Human-readable preview
    Text,
}

/// Render chapters in the requested format.
pub fn render(chapters: &[ChapterRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(chapters)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_preview(chapters)),
    }
}

fn render_preview(chapters: &[ChapterRecord]) -> String {
    let mut out = String::new();
    for (i, chapter) in chapters.iter().enumerate() {
        out.push_str(&format!(
            "=== {}. {} ({} lines, {} words) ===\n",
            i + 1,
            chapter.title,
            chapter.line_count(),
            chapter.word_count()
        ));
        out.push_str(&chapter.content);
        out.push_str("\n\n");
    }
    out
}

/// Parse a chapter list previously written as JSON.
pub fn parse_chapters(json: &str) -> Result<Vec<ChapterRecord>> {
    serde_json::from_str(json).context("Expected a JSON array of {\"title\", \"content\"} objects")
}

/// Write `content` to `path`, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
