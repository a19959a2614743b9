mod config;
mod markdown;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wf_core::{Color, Session, TERM_SLOTS, TermSet, TermSlot, tokenize};
use wf_scene::Scene;

use crate::config::AnalysisConfig;

#[derive(Parser)]
#[command(name = "wf", about = "wordfall term-occurrence visualizer")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream for a text or file
    Tokens {
        /// Inline source text
        text: Option<String>,

        /// Read source text from a file (.txt or .md)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Map term occurrences to cube placements and export a scene
    Analyze {
        /// Inline source text
        #[arg(long)]
        text: Option<String>,

        /// Read source text from a file (.txt or .md)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Term slot as `term` or `term=#rrggbb`, filled in slot order
        #[arg(long = "term", short = 't', value_name = "TERM[=COLOR]")]
        terms: Vec<String>,

        /// Load source text and term slots from a TOML file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the scene JSON here
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Seed the placement jitter for reproducible scenes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the built-in fox/dog demo analysis
    Demo {
        /// Write the scene JSON here
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Seed the placement jitter for reproducible scenes
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Tokens { text, file } => cmd_tokens(&cli, text.as_deref(), file.as_deref()),
        Commands::Analyze {
            text,
            file,
            terms,
            config,
            out,
            seed,
        } => cmd_analyze(
            text.as_deref(),
            file.as_deref(),
            terms,
            config.as_deref(),
            out.as_deref(),
            *seed,
        ),
        Commands::Demo { out, seed } => cmd_demo(out.as_deref(), *seed),
    }
}

/// Resolve source text from an inline argument or a file, never both.
fn resolve_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(t), None) => Ok(t.to_string()),
        (None, Some(path)) => config::read_source_file(path),
        (Some(_), Some(_)) => bail!("pass the text inline or via --file, not both"),
        (None, None) => bail!("no source text: pass it inline or via --file"),
    }
}

fn cmd_tokens(cli: &Cli, text: Option<&str>, file: Option<&Path>) -> Result<()> {
    let source = resolve_text(text, file)?;
    let tokens = tokenize(&source);
    for token in &tokens {
        println!("{token}");
    }
    if cli.verbose {
        eprintln!("--- {} tokens ---", tokens.len());
    }
    Ok(())
}

/// Parse a `--term` flag: `fox` or `fox=#aa00ff`.
fn parse_term_flag(raw: &str) -> Result<TermSlot> {
    let (term, color) = match raw.split_once('=') {
        Some((term, color)) => (term, color.parse::<Color>()?),
        None => (raw, Color::WHITE),
    };
    Ok(TermSlot::new(term, color))
}

fn term_set_from_flags(flags: &[String]) -> Result<TermSet> {
    if flags.len() > TERM_SLOTS {
        bail!("at most {TERM_SLOTS} --term flags are accepted");
    }
    let mut set = TermSet::new();
    for (i, raw) in flags.iter().enumerate() {
        set.slots[i] = parse_term_flag(raw)?;
    }
    Ok(set)
}

fn cmd_analyze(
    text: Option<&str>,
    file: Option<&Path>,
    terms: &[String],
    config: Option<&Path>,
    out: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let (source, set) = if let Some(path) = config {
        if text.is_some() || file.is_some() || !terms.is_empty() {
            bail!("--config replaces --text, --file, and --term");
        }
        let cfg = AnalysisConfig::load(path)?;
        (cfg.resolve_source()?, cfg.term_set())
    } else {
        (resolve_text(text, file)?, term_set_from_flags(terms)?)
    };

    run_analysis(&source, &set, out, seed)
}

fn cmd_demo(out: Option<&Path>, seed: Option<u64>) -> Result<()> {
    const DEMO_TEXT: &str = "The quick brown fox jumped over the lazy dog. \
                             The lazy dog slept on the quick brown fox.";

    let mut set = TermSet::new();
    set.slots[0] = TermSlot::new("fox", Color::new(0xaa, 0x00, 0xff));
    set.slots[1] = TermSlot::new("dog", Color::new(0x00, 0xff, 0xaa));

    run_analysis(DEMO_TEXT, &set, out, seed)
}

fn run_analysis(
    source: &str,
    terms: &TermSet,
    out: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut session = Session::new();
    let token_count = session.submit_text(source)?;
    tracing::debug!("tokenized {token_count} tokens");

    let batches = session.submit_terms(terms, &mut rng)?;

    let mut scene = Scene::new();
    for batch in &batches {
        scene.insert_batch(&batch.placements);
        println!(
            "slot {}: '{}' → {} matches, {} cubes",
            batch.slot,
            batch.term,
            batch.matches,
            batch.placements.len()
        );
    }
    println!("scene: {} cubes from {} tokens", scene.count(), token_count);

    if let Some(path) = out {
        wf_scene::export_json_file(&scene, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
