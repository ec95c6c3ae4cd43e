use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{debug, error, info};

use crate::config::{FileConfig, load_config};
use crate::export::{ExportOptions, ExportOutcome, export_transcript};
use crate::index_storage::ExportedState;
use crate::parsers::parse_hook_payload;
use crate::utils::validate_session_id;

/// Direct-mode arguments. Running with no arguments and piped stdin switches to
/// hook mode instead.
#[derive(Parser, Debug)]
#[command(name = "transcript-export")]
#[command(version)]
#[command(about = "Export Claude Code conversation transcripts to Markdown", long_about = None)]
pub struct Cli {
    /// Session identifier
    #[arg(long, value_name = "ID")]
    pub session_id: String,

    /// Path to JSONL transcript file
    #[arg(long, value_name = "PATH")]
    pub transcript: PathBuf,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,

    /// Current working directory (project path)
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Heading for assistant messages. Overrides the config file.
    #[arg(long, value_name = "NAME")]
    pub agent_name: Option<String>,

    /// Path to a configuration file.
    /// Defaults to $XDG_CONFIG_HOME/transcript-export/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<ExitCode> {
    let today = Local::now().date_naive();

    if env::args_os().len() == 1 && !io::stdin().is_terminal() {
        let config = load_config(None)?;
        return run_hook(io::stdin().lock(), &config, today);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            e.print()?;
            return Ok(code);
        }
    };

    run_direct(&cli, today)
}

/// Export one transcript named on the command line.
pub fn run_direct(cli: &Cli, date: NaiveDate) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let agent_name = cli.agent_name.as_deref().unwrap_or(config.agent_name());

    let options = ExportOptions::new(cli.session_id.clone(), cli.output.clone())
        .with_cwd(cli.cwd.clone())
        .with_agent_name(agent_name)
        .with_date(date);

    match export_transcript(&cli.transcript, &options)? {
        ExportOutcome::Exported(_) => Ok(ExitCode::SUCCESS),
        ExportOutcome::Empty => {
            error!("No messages found in transcript");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Export the session described by a hook payload, at most once per session id.
pub fn run_hook<R: Read>(input: R, config: &FileConfig, date: NaiveDate) -> Result<ExitCode> {
    let payload = match parse_hook_payload(input) {
        Ok(payload) => payload,
        Err(e) => {
            error!("{:#}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Err(e) = validate_session_id(&payload.session_id) {
        error!("{:#}", e);
        return Ok(ExitCode::FAILURE);
    }

    let cwd = PathBuf::from(&payload.cwd);
    let output_dir = cwd.join(config.history_dir());
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create export directory: {}", output_dir.display()))?;

    let state = ExportedState::new(&output_dir);
    if state.contains(&payload.session_id)? {
        debug!("Session {} already exported", payload.session_id);
        return Ok(ExitCode::SUCCESS);
    }

    let result = match payload.transcript_path().filter(|p| p.exists()) {
        Some(transcript) => {
            let options = ExportOptions::new(payload.session_id.clone(), output_dir.clone())
                .with_cwd(Some(cwd))
                .with_agent_name(config.agent_name())
                .with_date(date);
            export_transcript(&transcript, &options)
        }
        None => {
            debug!("No transcript for session {}", payload.session_id);
            Ok(ExportOutcome::Empty)
        }
    };

    // Mark the session even when the export failed, so the hook does not retry it.
    state.record(&payload.session_id)?;

    if result? == ExportOutcome::Empty {
        info!("Nothing to export for session {}", payload.session_id);
    }
    Ok(ExitCode::SUCCESS)
}
