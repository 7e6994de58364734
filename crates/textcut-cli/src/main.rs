//! textcut CLI - Split documents into sentence-aligned, token-bounded chunks.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use textcut_chunk::{LanguageDetector, ScriptClassifier, TextSplitter, TokenEstimator};
use textcut_core::{CutConfig, CutError, Language, LanguageClassifier, Result, SplitOutput};

/// textcut - Split text into chunks of whole sentences under a token budget
#[derive(Parser)]
#[command(name = "textcut")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/textcut/config.toml, then ./textcut.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a document into chunks
    Split {
        /// Text file to read (stdin if omitted or "-")
        path: Option<PathBuf>,

        /// Skip detection and use this language's profile (zh, en, other)
        #[arg(short, long)]
        language: Option<Language>,

        /// Override the token ceiling of the resolved language
        #[arg(short, long)]
        max_tokens: Option<usize>,

        /// Print only this chunk (1-based)
        #[arg(short, long)]
        part: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Detect the dominant language of a document
    Detect {
        /// Text file to read (stdin if omitted or "-")
        path: Option<PathBuf>,
    },

    /// Show the token estimate of a document
    Estimate {
        /// Text file to read (stdin if omitted or "-")
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error [{}]: {}", e.error_code(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CutConfig::load(path)?,
        None => CutConfig::load_default()?,
    };

    match cli.command {
        Commands::Split {
            path,
            language,
            max_tokens,
            part,
            format,
        } => {
            let text = read_input(path.as_deref())?;
            let classifier: Arc<dyn LanguageClassifier> = Arc::new(ScriptClassifier::new());
            let output = split(classifier, config, &text, language, max_tokens)?;
            print_split(&output, part, format)?;
        }
        Commands::Detect { path } => {
            let text = read_input(path.as_deref())?;
            let splitter = TextSplitter::with_script_classifier(config);
            let code = splitter.detector().detect_code(&text);
            let language = code
                .as_deref()
                .map(Language::from_code)
                .unwrap_or_default();
            println!("{} ({})", language, code.as_deref().unwrap_or("none"));
        }
        Commands::Estimate { path } => {
            let text = read_input(path.as_deref())?;
            let breakdown = TokenEstimator::new().breakdown(&text);
            println!("Words:       {}", breakdown.words);
            println!("CJK chars:   {} (x2)", breakdown.cjk_chars);
            println!("Punctuation: {}", breakdown.punctuation);
            println!("Whitespace:  {}", breakdown.whitespace);
            println!("Total:       {}", breakdown.total());
        }
    }

    Ok(())
}

/// Resolve the language, apply the `--max-tokens` override to its profile
/// and split.
fn split(
    classifier: Arc<dyn LanguageClassifier>,
    mut config: CutConfig,
    text: &str,
    language: Option<Language>,
    max_tokens: Option<usize>,
) -> Result<SplitOutput> {
    let language = language
        .unwrap_or_else(|| LanguageDetector::new(Arc::clone(&classifier)).detect(text));

    if let Some(max_tokens) = max_tokens {
        if max_tokens == 0 {
            return Err(CutError::invalid_argument(
                "--max-tokens must be greater than zero",
            ));
        }
        config.languages.for_language_mut(language).max_tokens = max_tokens;
    }

    Ok(TextSplitter::new(classifier, config).split_as(text, language))
}

fn print_split(output: &SplitOutput, part: Option<usize>, format: OutputFormat) -> Result<()> {
    let chunks = match part {
        Some(index) => {
            let chunk = output.chunk(index).ok_or_else(|| {
                CutError::invalid_argument(format!(
                    "part {} does not exist, document has {} part(s)",
                    index,
                    output.len()
                ))
            })?;
            std::slice::from_ref(chunk)
        }
        None => output.chunks.as_slice(),
    };

    match format {
        OutputFormat::Text => {
            for chunk in chunks {
                println!("Part {} :\n\n{}\n", chunk.index, chunk.content);
            }
            eprintln!(
                "Split the text into {} parts ({}, max {} tokens)",
                output.len(),
                output.language,
                output.max_tokens
            );
        }
        OutputFormat::Json => {
            let json = match part {
                Some(_) => serde_json::to_string_pretty(&chunks[..])?,
                None => serde_json::to_string_pretty(output)?,
            };
            println!("{}", json);
        }
    }

    Ok(())
}

/// Read the document from a file or stdin.
///
/// Only plain text is accepted; extracting text from word-processor or PDF
/// files is left to other tools.
fn read_input(path: Option<&Path>) -> Result<String> {
    let path = match path {
        Some(p) if p != Path::new("-") => p,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }
    };

    if !is_supported_file(path) {
        return Err(CutError::invalid_input(
            path.display().to_string(),
            "unsupported file type, expected plain text (.txt, .text, .md)",
        ));
    }

    fs::read_to_string(path)
        .map_err(|e| CutError::invalid_input(path.display().to_string(), e.to_string()))
}

fn is_supported_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        None => true,
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "txt" | "text" | "md"),
    }
}
