//! CLI entry point for the citegraph script runner.
//!
//! Reports go to stdout (text or JSON lines); logs go to stderr.

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use citegraph_core::{CitegraphConfig, OutputFormat, PaperId};
use citegraph_cli::script;
use citegraph_cli::{Report, ScriptRunner};

#[derive(Parser)]
#[command(name = "citegraph")]
#[command(about = "Build and query a citation graph from a command script")]
struct Cli {
    #[command(subcommand)]
    command: Mode,

    /// Config file prefix (default: citegraph).
    #[arg(short, long, default_value = "citegraph", global = true)]
    config: String,

    /// Override the root publication id.
    #[arg(long, global = true)]
    root: Option<String>,

    /// Print one JSON object per command instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Exit with an error if any command failed.
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Execute every command in a script file.
    Run {
        /// Path to the script.
        file: PathBuf,
    },
    /// Read commands from stdin, one per line.
    Repl,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CitegraphConfig::load(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let root_id = PaperId(cli.root.clone().unwrap_or(config.root_id));
    tracing::debug!(root = %root_id, "Starting graph");
    let mut runner = ScriptRunner::new(root_id);

    match cli.command {
        Mode::Run { ref file } => {
            for report in runner.run_file(file)? {
                emit(&report, format)?;
            }
        }
        Mode::Repl => {
            let stdin = std::io::stdin();
            for (i, line) in stdin.lock().lines().enumerate() {
                let line = line?;
                match script::parse_line(&line, i + 1) {
                    Ok(Some(command)) => emit(&runner.execute(i + 1, &command), format)?,
                    Ok(None) => {}
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
    }

    if cli.strict && runner.failures() > 0 {
        anyhow::bail!("{} command(s) failed", runner.failures());
    }
    Ok(())
}

fn emit(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
