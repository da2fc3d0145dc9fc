use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lawlens_corpus::OffenceCorpus;
use lawlens_search::{analyzer_for_corpus, AnalysisConfig, IncidentAnalyzer};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod http_api;

#[derive(Parser)]
#[command(name = "lawlens")]
#[command(about = "Legal-awareness guidance: match incident descriptions to IPC sections", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Offence corpus (.json or .csv)
    #[arg(long, global = true, env = "LAWLENS_CORPUS", default_value = "ipc_sections.json")]
    corpus: PathBuf,

    /// Analysis thresholds (JSON or TOML); defaults apply when omitted
    #[arg(long, global = true, env = "LAWLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an incident description and print matching sections as JSON
    Analyze(AnalyzeArgs),

    /// Print every loaded offence record as JSON
    Sections(SectionsArgs),

    /// Serve the analysis API over HTTP (GET /, GET /sections, POST /analyze)
    ServeHttp(ServeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Incident description; read from stdin when omitted
    text: Vec<String>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct SectionsArgs {
    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:8000
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let corpus = load_corpus(&cli.corpus)?;
    match cli.command {
        Commands::Analyze(args) => {
            let config = load_config(cli.config.as_deref())?;
            let analyzer = build_analyzer(&corpus, config)?;
            let text = if args.text.is_empty() {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read incident description from stdin")?;
                buf
            } else {
                args.text.join(" ")
            };
            print_json(&analyzer.analyze(&text), args.pretty)
        }
        Commands::Sections(args) => print_json(corpus.records(), args.pretty),
        Commands::ServeHttp(args) => {
            let config = load_config(cli.config.as_deref())?;
            let analyzer = build_analyzer(&corpus, config)?;
            serve_http(args, corpus, analyzer).await
        }
    }
}

fn load_corpus(path: &Path) -> Result<OffenceCorpus> {
    OffenceCorpus::load(path)
        .with_context(|| format!("Failed to load offence corpus {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_file(path),
        None => Ok(AnalysisConfig::default()),
    }
}

fn build_analyzer(corpus: &OffenceCorpus, config: AnalysisConfig) -> Result<IncidentAnalyzer> {
    analyzer_for_corpus(corpus, config).context("Failed to build offence index")
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

async fn serve_http(
    args: ServeArgs,
    corpus: OffenceCorpus,
    analyzer: IncidentAnalyzer,
) -> Result<()> {
    let app = http_api::router(http_api::HttpState {
        corpus: Arc::new(corpus),
        analyzer: Arc::new(analyzer),
    });

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    log::info!("Serving LawLens API on http://{}", args.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
