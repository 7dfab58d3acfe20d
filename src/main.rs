//! sudden-death - frame a message from the command line or stdin

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sudden_death::{escape_lines, format_with, FillMode, FrameOptions, Glyphs};

#[derive(Parser)]
#[command(name = "sudden-death")]
#[command(about = "Frame a message in a 突然の死 speech bubble")]
#[command(version)]
struct Cli {
    /// Message to frame; read from stdin when absent
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Prefix every output line with '.' for pasting into Slack
    #[arg(short, long)]
    slack: bool,

    /// Header glyphs, comma separated (e.g. "人")
    #[arg(long, value_name = "GLYPHS")]
    header: Option<Glyphs>,

    /// Footer glyphs, comma separated (e.g. "Y,^")
    #[arg(long, value_name = "GLYPHS")]
    footer: Option<Glyphs>,

    /// Ornament opening each body line
    #[arg(long, value_name = "GLYPH")]
    left: Option<String>,

    /// Ornament closing each body line
    #[arg(long, value_name = "GLYPH")]
    right: Option<String>,

    /// How a single border glyph is stretched to the bar width
    #[arg(long, value_name = "MODE", default_value_t = FillMode::Exact)]
    fill: FillMode,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn frame_options(&self) -> FrameOptions {
        let mut options = FrameOptions::default().with_fill_mode(self.fill);
        if let Some(header) = &self.header {
            options = options.with_header(header.clone());
        }
        if let Some(footer) = &self.footer {
            options = options.with_footer(footer.clone());
        }
        if let Some(left) = &self.left {
            options = options.with_left(left.as_str());
        }
        if let Some(right) = &self.right {
            options = options.with_right(right.as_str());
        }
        options
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_message(cli: &Cli) -> Result<String> {
    // An empty -m counts as absent
    if let Some(message) = cli.message.as_deref().filter(|m| !m.is_empty()) {
        return Ok(message.to_string());
    }

    tracing::info!("reading message from stdin");
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("unable to read stdin")?;
    // Invalid UTF-8 becomes U+FFFD rather than failing the read
    Ok(String::from_utf8_lossy(&input).into_owned())
}

fn run(cli: Cli) -> Result<()> {
    let message = read_message(&cli)?;
    let options = cli.frame_options();

    let formatted = format_with(&message, &options);
    let output = if cli.slack {
        escape_lines(&formatted)
    } else {
        formatted
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("unable to write output")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
