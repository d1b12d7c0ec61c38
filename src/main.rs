use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use slotpath::config::{Config, OutputFormat};
use slotpath::edit::{apply_all, Assignment};
use slotpath::file::loader::{load_document, load_from_stdin};
use slotpath::file::saver::{render_document, save_document};

/// Slotpath - overwrite nodes of a YAML/JSON document by slash path
#[derive(Parser)]
#[command(name = "slotpath")]
#[command(version)]
#[command(about = "Overwrite nodes of a YAML/JSON document by slash path", long_about = None)]
struct Cli {
    /// Document to edit, or `-` to read from stdin
    file: String,

    /// Assignments of the form PATH=VALUE, applied in order
    #[arg(required = true)]
    assignments: Vec<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite the input file
    #[arg(short, long)]
    in_place: bool,

    /// Output format (default from config, else yaml)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Take values verbatim as strings instead of parsing them as YAML
    #[arg(short, long)]
    string: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match verbose {
            0 => config.log_filter.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(directive)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = match Config::try_load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_tracing(cli.verbose, &config);
    if let Some(err) = config_error {
        tracing::warn!("using default config: {:#}", err);
    }

    // CLI flags override config
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.string {
        config.parse_values = false;
    }

    let from_stdin = cli.file == "-";
    if from_stdin && cli.in_place {
        anyhow::bail!("--in-place needs a file, not stdin");
    }

    let assignments = cli
        .assignments
        .iter()
        .map(|text| Assignment::parse(text, config.parse_values))
        .collect::<Result<Vec<_>>>()?;

    let mut root = if from_stdin {
        load_from_stdin()?
    } else {
        load_document(&cli.file)?
    };

    apply_all(&mut root, &assignments)?;

    let target = if cli.in_place {
        Some(PathBuf::from(&cli.file))
    } else {
        cli.output
    };

    match target {
        Some(path) => save_document(&path, &root, &config)
            .with_context(|| format!("Failed to save {}", path.display()))?,
        None => {
            let text = render_document(&root, config.output_format)?;
            io::stdout()
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
