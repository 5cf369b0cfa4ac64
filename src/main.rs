use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use plagscan::{CheckResult, CompareResult, DocumentInput, Plagscan, PlagscanConfig, UploadedFile};

#[derive(Parser, Debug)]
#[command(
    name = "plagscan",
    version,
    about = "Check documents for text copied from the web, or compare two documents"
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "PLAGSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a file (PDF, DOCX or text) against web search; `-` reads text from stdin
    Check { path: String },
    /// Compare two documents; either may be `-` for stdin text
    Compare { a: String, b: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PlagscanConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PlagscanConfig::default(),
    };
    config.apply_env();
    config.validate().context("invalid configuration")?;
    init_tracing(&config);

    let plagscan = Plagscan::from_config(&config)?;

    match cli.command {
        Command::Check { path } => {
            let result = if path == "-" {
                let text = read_stdin().await?;
                plagscan.check_text(&text).await?
            } else {
                let upload = read_upload(Path::new(&path)).await?;
                plagscan.check_file(&upload).await?
            };
            print_check(&result, cli.json)?;
        }
        Command::Compare { a, b } => {
            anyhow::ensure!(a != "-" || b != "-", "only one document can come from stdin");
            let a = read_input(&a).await?;
            let b = read_input(&b).await?;
            let result = plagscan.compare(&a, &b).await?;
            print_compare(&result, cli.json)?;
        }
    }

    Ok(())
}

fn init_tracing(config: &PlagscanConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("failed to read stdin")?;
    Ok(text)
}

async fn read_upload(path: &Path) -> Result<UploadedFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(UploadedFile::new(name, None, bytes))
}

async fn read_input(arg: &str) -> Result<DocumentInput> {
    if arg == "-" {
        Ok(DocumentInput::text(read_stdin().await?))
    } else {
        Ok(DocumentInput::file(read_upload(Path::new(arg)).await?))
    }
}

fn print_check(result: &CheckResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!(
        "score: {:.2}% ({} of {} probes matched)",
        result.score, result.matched, result.checked
    );
    for m in &result.matches {
        match m.paraphrase_score {
            Some(sim) => println!("  ~ {:.3}  \"{}\"  {}", sim, m.probe, m.candidate.link),
            None => println!("  =        \"{}\"  {}", m.probe, m.candidate.link),
        }
    }
    Ok(())
}

fn print_compare(result: &CompareResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    let source = if result.embed_sim.is_some() {
        "embeddings"
    } else {
        "lexical"
    };
    println!(
        "similarity: {:.2}% ({source}; {} vs {} chars)",
        result.similarity, result.len_a, result.len_b
    );
    Ok(())
}
