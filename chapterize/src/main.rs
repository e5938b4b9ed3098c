//! chapterize - Reflow manuscripts and split them into chapters

mod config;
mod ingest;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ChapterizeConfig;
use manuscript::{
    ChapterRecord, EditSession, LabelSet, MarkerPattern, Method, Notice, NoticeLevel,
    SegmentOutcome, Segmenter, SessionObserver,
};
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chapterize")]
#[command(about = "Reflow manuscripts and split them into chapters", long_about = None)]
#[command(version)]
struct Args {
    /// Show progress messages
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reflow a document and split it into chapters
    Split {
        /// Text or PDF file to read ("-" for stdin)
        file: PathBuf,

        /// Segmentation method: auto, keyword or paragraph
        #[arg(short, long)]
        method: Option<Method>,

        /// Reflow width in characters
        #[arg(short, long)]
        width: Option<usize>,

        /// Fallback label preset: content, translation or editor
        #[arg(long)]
        labels: Option<String>,

        /// Only recognize chapter markers at the start of a line
        #[arg(long)]
        line_start: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Reflow a document to a fixed width without splitting it
    Reflow {
        /// Text or PDF file to read ("-" for stdin)
        file: PathBuf,

        /// Reflow width in characters
        #[arg(short, long)]
        width: Option<usize>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Split one chapter of a saved chapter list in two
    Resplit {
        /// JSON chapter list written by `chapterize split`
        chapters: PathBuf,

        /// Position of the chapter to split (0-based)
        #[arg(long)]
        index: usize,

        /// Number of lines to keep in the first part
        #[arg(long, allow_negative_numbers = true)]
        line: i64,

        /// Title for the first part
        #[arg(long)]
        title: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default reflow width
    SetWidth {
        /// Width in characters (at least 10)
        value: usize,
    },
    /// Set default segmentation method
    SetMethod {
        /// auto, keyword or paragraph
        method: Method,
    },
    /// Set the fallback label preset
    SetLabels {
        /// content, translation or editor
        preset: String,
    },
    /// Recognize an additional chapter marker keyword
    AddMarker {
        /// Language tag (e.g. "it")
        language: String,
        /// Keyword (e.g. "Capitolo")
        keyword: String,
        /// The number comes before the keyword, as in CJK headings
        #[arg(long)]
        number_first: bool,
    },
}

/// Prints session notices to stderr.
struct StderrReporter;

impl SessionObserver for StderrReporter {
    fn chapters_replaced(&mut self, chapters: &[ChapterRecord], _outcome: SegmentOutcome) {
        for (i, chapter) in chapters.iter().enumerate() {
            log::info!(
                "  {}. {} ({} words)",
                i + 1,
                chapter.title,
                chapter.word_count()
            );
        }
    }

    fn chapter_split(&mut self, chapters: &[ChapterRecord], current: usize) {
        eprintln!(
            "Split done: now {} chapters, \"{}\" starts at position {}",
            chapters.len(),
            chapters[current].title,
            current
        );
    }

    fn notice(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => eprintln!("{}", notice.message),
            NoticeLevel::Warning => eprintln!("Warning: {}", notice.message),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    match &args.command {
        Commands::Split {
            file,
            method,
            width,
            labels,
            line_start,
            format,
            output,
        } => {
            let mut config = ChapterizeConfig::load().context("Failed to load configuration")?;
            if let Some(preset) = labels {
                config.labels = preset.clone();
            }
            if *line_start {
                config.line_start_only = true;
            }
            let method = method.unwrap_or(config.method);
            let width = width.unwrap_or(config.max_width);

            let raw = ingest::read_document(file)?;
            log::info!("Read {} characters from {}", raw.len(), file.display());

            let chapters = split_document(&raw, &config, method, width)?;
            let rendered = output::render(&chapters, *format)?;
            output::write_output(output.as_deref(), &rendered)?;
        }
        Commands::Reflow {
            file,
            width,
            output,
        } => {
            let config = ChapterizeConfig::load().context("Failed to load configuration")?;
            let raw = ingest::read_document(file)?;
            let mut text = manuscript::reflow(&raw, width.unwrap_or(config.max_width));
            if !text.ends_with('\n') {
                text.push('\n');
            }
            output::write_output(output.as_deref(), &text)?;
        }
        Commands::Resplit {
            chapters,
            index,
            line,
            title,
            format,
            output,
        } => {
            let config = ChapterizeConfig::load().context("Failed to load configuration")?;
            let json = std::fs::read_to_string(chapters)
                .with_context(|| format!("Failed to read {}", chapters.display()))?;
            let list = output::parse_chapters(&json)?;

            match resplit(list, &config, *index, *line, title.as_deref())? {
                Some(result) => {
                    let rendered = output::render(&result, *format)?;
                    output::write_output(output.as_deref(), &rendered)?;
                }
                None => eprintln!("Nothing written; {} is unchanged.", chapters.display()),
            }
        }
        Commands::Config { action } => {
            return handle_config_command(action);
        }
    }

    Ok(())
}

fn init_logging(args: &Args) {
    let level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Reflow and segment a raw document.
fn split_document(
    raw: &str,
    config: &ChapterizeConfig,
    method: Method,
    width: usize,
) -> Result<Vec<ChapterRecord>> {
    let segmenter = Segmenter::new(config.segmenter_config()?)
        .context("Failed to compile chapter markers")?;

    let mut session = EditSession::new(segmenter)
        .with_max_width(width)
        .with_observer(Box::new(StderrReporter));
    session.ingest(raw, method);

    Ok(session.into_chapters())
}

/// Split one chapter of `chapters`.
///
/// Returns `None` when the parameters are rejected; the reason has already
/// been reported.
fn resplit(
    chapters: Vec<ChapterRecord>,
    config: &ChapterizeConfig,
    index: usize,
    line: i64,
    title: Option<&str>,
) -> Result<Option<Vec<ChapterRecord>>> {
    let segmenter = Segmenter::new(config.segmenter_config()?)
        .context("Failed to compile chapter markers")?;

    let mut session = EditSession::new(segmenter)
        .with_chapters(chapters)
        .with_observer(Box::new(StderrReporter));

    if let Err(e) = session.select(index) {
        eprintln!("Warning: {}", e);
        return Ok(None);
    }
    // Zero and negative lines are reported as a missing line number.
    let line = usize::try_from(line).unwrap_or(0);
    if session.split_current(line, title).is_err() {
        return Ok(None);
    }

    Ok(Some(session.into_chapters()))
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = ChapterizeConfig::load()?;
            println!("Configuration file: {:?}", ChapterizeConfig::config_path()?);
            println!();
            println!("max_width = {}", config.max_width);
            println!("method = \"{}\"", config.method);
            println!("labels = \"{}\"", config.labels);
            println!("max_title_chars = {}", config.max_title_chars);
            println!("line_start_only = {}", config.line_start_only);
            println!("keep_preamble = {}", config.keep_preamble);
            println!();
            println!("Chapter markers:");
            for marker in manuscript::default_markers() {
                println!("  {} ({})", marker.keyword, marker.language);
            }
            for marker in &config.extra_markers {
                println!("  {} ({}) [custom]", marker.keyword, marker.language);
            }
        }
        ConfigAction::SetWidth { value } => {
            let mut config = ChapterizeConfig::load()?;
            config.max_width = (*value).max(10);
            config.save()?;
            println!("Default width set to: {}", config.max_width);
        }
        ConfigAction::SetMethod { method } => {
            let mut config = ChapterizeConfig::load()?;
            config.method = *method;
            config.save()?;
            println!("Default method set to: {}", config.method);
        }
        ConfigAction::SetLabels { preset } => {
            if LabelSet::preset(preset).is_none() {
                anyhow::bail!(
                    "Unknown label preset '{}'. Expected content, translation or editor",
                    preset
                );
            }
            let mut config = ChapterizeConfig::load()?;
            config.labels = preset.clone();
            config.save()?;
            println!("Label preset set to: {}", preset);
        }
        ConfigAction::AddMarker {
            language,
            keyword,
            number_first,
        } => {
            let marker = if *number_first {
                MarkerPattern::number_first(language, keyword)
            } else {
                MarkerPattern::new(language, keyword)
            };

            let mut config = ChapterizeConfig::load()?;
            config.extra_markers.push(marker);
            // Reject keywords that would break the marker regex before saving
            Segmenter::new(config.segmenter_config()?)
                .context("Marker could not be added")?;
            config.save()?;
            println!("Added chapter marker: {} ({})", keyword, language);
        }
    }
    Ok(())
}
