use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use humpmatch::{MatcherOptions, PatternMatch, PatternMatcher, TextSpan};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to match
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Read candidates from FILE instead of stdin
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Load matcher options from a TOML file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fall back to edit-distance matching
    #[arg(short = 'f', long)]
    fuzzy: bool,

    /// Accept substrings anywhere in the candidate
    #[arg(short = 's', long)]
    substring: bool,

    /// Split pattern and candidates on these characters (e.g. ".:")
    #[arg(short = 'C', long, value_name = "CHARS")]
    container: Option<String>,

    /// Locale for case-insensitive comparison (e.g. tr-TR)
    #[arg(short = 'l', long, value_name = "TAG")]
    locale: Option<String>,

    /// Prefix each line with the match kind
    #[arg(short = 'k', long)]
    kind: bool,

    /// Print at most N matches
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,

    /// Highlight matched characters
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("humpmatch: {err:#}");
        std::process::exit(2);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "humpmatch=debug,warn",
        _ => "humpmatch=trace,warn",
    };
    let filter = EnvFilter::try_from_env("HUMPMATCH_LOG").unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let options = build_options(args)?;
    let matcher = PatternMatcher::new(&args.pattern, &options)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let ranked = matcher.rank(input.lines());
    debug!(
        candidates = input.lines().count(),
        matched = ranked.len(),
        "ranked candidates"
    );

    let color = match args.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_tty(),
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for ranked in ranked.iter().take(args.limit.unwrap_or(usize::MAX)) {
        if args.kind {
            write!(out, "{}\t", ranked.pattern_match.kind())?;
        }
        if color {
            writeln!(out, "{}", highlight(ranked.candidate, &ranked.pattern_match))?;
        } else {
            writeln!(out, "{}", ranked.candidate)?;
        }
    }
    out.flush()?;
    matcher.dispose();

    if ranked.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Merge the config file (if any) with command line flags; flags win.
fn build_options(args: &Args) -> Result<MatcherOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str::<MatcherOptions>(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => MatcherOptions::default(),
    };

    if args.fuzzy {
        options.allow_fuzzy_matching = true;
    }
    if args.substring {
        options.allow_simple_substring_matching = true;
    }
    if let Some(locale) = &args.locale {
        options.locale = Some(locale.clone());
    }
    if let Some(chars) = &args.container {
        if chars.is_empty() {
            bail!("--container needs at least one separator character");
        }
        options.container_split_characters = Some(chars.chars().collect());
    }
    options.include_matched_spans = true;
    Ok(options)
}

/// Render `candidate` with its matched spans in bold.
fn highlight(candidate: &str, pattern_match: &PatternMatch) -> String {
    let Some(spans) = pattern_match.matched_spans() else {
        return candidate.to_string();
    };
    let chars: Vec<char> = candidate.chars().collect();
    let mut out = String::with_capacity(candidate.len() * 2);
    let mut pos = 0;
    for span in spans {
        let span = TextSpan::from_bounds(span.start.min(chars.len()), span.end().min(chars.len()));
        out.extend(&chars[pos..span.start]);
        let matched: String = span.slice(&chars).iter().collect();
        out.push_str(&matched.bold().yellow().to_string());
        pos = span.end();
    }
    out.extend(&chars[pos..]);
    out
}
