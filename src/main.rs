//! Verity terminal binary.
//!
//! Loads configuration, initializes tracing, and runs one respondent's
//! interview session over stdin/stdout. Logs go to stderr so the interview
//! view stays clean.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use verity::adapters::TerminalSession;
use verity::config::AppConfig;
use verity::domain::interview::{InterviewScript, InterviewSequencer};

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load().context("load configuration")?;
    config.validate().context("validate configuration")?;

    init_tracing(&config.runtime.log_level)?;

    let brief = config.interview.research_brief();
    let mut script = InterviewScript::for_brief(&brief);
    if let Some(deck) = config
        .interview
        .load_prompt_deck()
        .context("load prompt deck")?
    {
        script.apply_overrides(&deck);
    }

    let sequencer = InterviewSequencer::with_script(script, brief.domain)
        .context("create interview session")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = TerminalSession::new(sequencer, stdin.lock(), stdout.lock())
        .with_banner(config.runtime.show_banner);

    let summary = session.run().context("run interview session")?;
    tracing::info!(
        completed = summary.completed_interviews,
        "verity session finished"
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("parse log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
