// Document ingestion: plain text files, PDFs, or stdin

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a document as plain text.
///
/// `-` reads stdin. Files ending in `.pdf` go through PDF text extraction;
/// anything else is read as UTF-8, replacing invalid sequences.
pub fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(decode_text(&bytes));
    }

    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        read_pdf(path)
    } else {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(decode_text(&bytes))
    }
}

/// Extract the text of every page, one page after another.
fn read_pdf(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow::anyhow!("Failed to extract text from PDF: {}", e))?;

    let joined = join_pages(&text);
    if joined.trim().is_empty() {
        anyhow::bail!("No text found in PDF: {}", path.display());
    }
    log::debug!("extracted {} characters from {}", joined.len(), path.display());

    Ok(joined)
}

/// Join extracted pages with a single newline.
///
/// pdf-extract separates pages with form feeds and pads them with newlines.
fn join_pages(text: &str) -> String {
    text.split('\x0C')
        .map(|page| page.trim_matches('\n'))
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode bytes as UTF-8, dropping a leading byte-order mark.
fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text: &str = &text;
    text.strip_prefix('\u{feff}').unwrap_or(text).to_string()
}
