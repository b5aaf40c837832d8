use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use video_session::cli::{run_session, TerminalPrompt};
use video_session::config::DEFAULT_CATALOG_PATH;
use video_session::model::VideoCatalog;
use video_session::source::load_catalog;
use video_session::{OutputFormat, SessionConfig, SessionEngine};

#[derive(Parser, Debug)]
#[command(name = "video-session")]
#[command(about = "Browse a video catalog: play, search, flag and build playlists", long_about = None)]
struct Args {
    /// Path to the video catalog (.txt or .xml)
    #[arg(short = 'c', long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: String,

    /// Print one JSON object per command instead of text
    #[arg(long)]
    json: bool,

    /// Seed for PLAY_RANDOM (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Lines from stdin without holding its lock, so the selection prompt
/// can read from it between commands
fn stdin_lines() -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let output = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let config = SessionConfig::new(&args.catalog)
        .with_output(output)
        .with_seed(args.seed);

    let library = load_catalog(&config.catalog_path)?;
    log::info!("Catalog ready: {} videos", library.len());

    // Keep stdout clean for JSON reports
    let prompt_out: Box<dyn Write> = match config.output {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut engine = SessionEngine::new(library, TerminalPrompt::new(prompt_out));
    if let Some(seed) = config.seed {
        engine = engine.with_seed(seed);
    }

    let mut stdout = io::stdout();
    if config.output == OutputFormat::Text {
        writeln!(
            stdout,
            "Hello and welcome to Video Session, what would you like to do?"
        )?;
        writeln!(stdout, "Enter HELP for a list of available commands or EXIT to terminate.")?;
    }

    let executed = run_session(&mut engine, stdin_lines(), &mut stdout, config.output)?;
    log::info!("Session finished: {} command(s) executed", executed);

    Ok(())
}
