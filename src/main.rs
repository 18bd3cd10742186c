use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use csv_code_core::constants::{PREFIX_ENV, READ_CHUNK_BYTES_ENV};
use csv_code_core::layout::LAYOUTS;
use csv_code_core::{
    Csv, CsvGenerator, GeneratorConfig, Layout, LayoutIndex, LayoutSelector, SeededSelector,
    ThreadRngSelector, read_chunk_bytes_from_env_value,
};

#[derive(Parser)]
#[command(name = "csv-code")]
#[command(about = "Secure Verification Code (CSV) generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a code for the content of a file
    File {
        /// Document file to digest
        path: PathBuf,
        #[command(flatten)]
        code: CodeArgs,
    },
    /// Generate a code for a precomputed digest
    Digest {
        /// Digest as hexadecimal (a SHA-512 digest is 128 hex characters)
        hex: String,
        #[command(flatten)]
        code: CodeArgs,
    },
    /// Print the layout table
    Layouts,
}

#[derive(Args)]
struct CodeArgs {
    /// Document identifier (0 to 78364164095)
    #[arg(long)]
    id: u64,
    /// Three character prefix (defaults to CSV_PREFIX)
    #[arg(long)]
    prefix: Option<String>,
    /// Seed for reproducible layout selection
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON report instead of the bare code
    #[arg(long)]
    json: bool,
}

/// Settings resolved from the environment once at startup.
struct AppConfig {
    generator: GeneratorConfig,
    default_prefix: Option<String>,
}

impl AppConfig {
    fn from_env() -> anyhow::Result<Self> {
        let chunk = read_chunk_bytes_from_env_value(std::env::var(READ_CHUNK_BYTES_ENV).ok())?;
        let default_prefix = std::env::var(PREFIX_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty());

        Ok(Self {
            generator: GeneratorConfig::new(chunk)?,
            default_prefix,
        })
    }
}

#[derive(Serialize)]
struct CodeReport {
    code: String,
    prefix: String,
    document_id: u64,
    layout_index: LayoutIndex,
}

impl CodeReport {
    fn new(csv: &Csv, document_id: u64) -> Self {
        Self {
            code: csv.to_string(),
            prefix: csv.prefix().to_string(),
            document_id,
            layout_index: csv.layout_index(),
        }
    }
}

/// Entry point for the `csv-code` tool.
///
/// # Environment Variables
/// - `CSV_PREFIX`: prefix used when `--prefix` is not given
/// - `CSV_READ_CHUNK_BYTES`: bytes read per chunk while digesting files (default: 4096)
/// - `RUST_LOG`: log filter (default directive: `csv_code=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("csv_code=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::File { path, code }) => {
            let prefix = resolve_prefix(code.prefix.as_deref(), &config)?;
            tracing::info!("generating code for {}", path.display());
            let csv = generator(code.seed, config.generator)
                .generate_from_file(&prefix, code.id, &path)?;
            print_code(&csv, code.id, code.json)?;
        }
        Some(Commands::Digest { hex, code }) => {
            let prefix = resolve_prefix(code.prefix.as_deref(), &config)?;
            let digest = decode_digest(&hex)?;
            let csv = generator(code.seed, config.generator)
                .generate_from_digest(&prefix, code.id, &digest)?;
            print_code(&csv, code.id, code.json)?;
        }
        Some(Commands::Layouts) => {
            for index in LayoutIndex::all() {
                let layout = Layout::get(index);
                println!("{:>2} {} {:?}", index, index.marker(), layout.positions());
            }
            tracing::debug!(count = LAYOUTS.len(), "printed layout table");
        }
        None => {
            println!("Use 'csv-code --help' for commands");
        }
    }

    Ok(())
}

fn generator(seed: Option<u64>, config: GeneratorConfig) -> CsvGenerator<Box<dyn LayoutSelector>> {
    let selector: Box<dyn LayoutSelector> = match seed {
        Some(seed) => Box::new(SeededSelector::new(seed)),
        None => Box::new(ThreadRngSelector),
    };
    CsvGenerator::with_selector(selector, config)
}

fn resolve_prefix(flag: Option<&str>, config: &AppConfig) -> anyhow::Result<String> {
    match flag.or(config.default_prefix.as_deref()) {
        Some(prefix) => Ok(prefix.to_string()),
        None => bail!("no prefix given: pass --prefix or set {}", PREFIX_ENV),
    }
}

fn decode_digest(input: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(input.trim()).with_context(|| format!("digest is not valid hex: '{}'", input))
}

fn print_code(csv: &Csv, document_id: u64, json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(&CodeReport::new(csv, document_id))?
        );
    } else {
        println!("{}", csv);
    }
    Ok(())
}
