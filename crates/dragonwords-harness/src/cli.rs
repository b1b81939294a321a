use std::io::{BufRead, Write};

use clap::Parser;

use dragonwords::{Code, FontMetrics, PanelConfig, ViewportPx};

use crate::error::Result;
use crate::logging;
use crate::session::{SessionMetrics, read_words, run_session};

#[derive(Debug, Parser)]
#[command(
    name = "dragonwords-harness",
    about = "Render a DragonWords panel for candidate words read from stdin",
    version
)]
pub struct Cli {
    /// Panel viewport width in pixels.
    #[arg(long, default_value_t = 500.0)]
    pub width: f64,

    /// Panel viewport height in pixels.
    #[arg(long, default_value_t = 200.0)]
    pub height: f64,

    /// Font cell width in pixels.
    #[arg(long = "cell-width", default_value_t = 10.0)]
    pub cell_width: f64,

    /// Font cell height in pixels.
    #[arg(long = "cell-height", default_value_t = 20.0)]
    pub cell_height: f64,

    /// Look up this code after rendering and print the injected word.
    #[arg(long)]
    pub lookup: Option<String>,

    /// Print a JSON report instead of the panel text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    #[must_use]
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            viewport: ViewportPx::new(self.width, self.height),
            font: FontMetrics::new(self.cell_width, self.cell_height),
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::json_requested());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(cli, PanelConfig::from_env(), stdin.lock(), stdout.lock())
}

pub fn run<R: BufRead, W: Write>(cli: Cli, config: PanelConfig, input: R, mut out: W) -> Result<()> {
    // Reject a bad code before doing any work.
    let lookup = cli.lookup.as_deref().map(str::parse::<Code>).transpose()?;
    let lines = input.lines().collect::<std::io::Result<Vec<String>>>()?;
    let words = read_words(lines);
    tracing::debug!(words = words.len(), config = %config.to_json(), "starting session");

    let report = run_session(config, cli.metrics(), words, lookup)?;

    if cli.json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        write!(out, "{}", report.text)?;
        if let Some(word) = &report.injected {
            writeln!(out, "{word}")?;
        }
    }
    out.flush()?;
    Ok(())
}
