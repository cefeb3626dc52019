use clap::{Parser, ValueEnum};
use std::{io::Read, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use turbine::{
    config::{self, RegistryConfig},
    Error, InternalResult, LanguageRegistry, Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One token per line: position, kind and quoted text
    Text,
    /// JSON array of tokens
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to tokenize; reads stdin when omitted
    file: Option<PathBuf>,

    /// Path to a registry config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language tag of the source
    #[arg(short, long, default_value = "turbine")]
    language: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List registered languages and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> InternalResult<()> {
    let registry_config: RegistryConfig = match &cli.config {
        Some(path) => config::from_file(path)?,
        None => RegistryConfig::default(),
    };

    info!("config loaded.");

    debug!("config: {:?}", registry_config);

    let registry = LanguageRegistry::from_config(&registry_config)?;

    if cli.list {
        for tag in registry.tags() {
            if let Some(language) = registry.lookup(&tag) {
                println!("{}\t{}\t{}", tag, language.title(), language.description());
            }
        }
        return Ok(());
    }

    let source = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::internal(format!("Failed to read source file: {}", e)))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::internal(format!("Failed to read stdin: {}", e)))?;
            buffer
        }
    };

    debug!("Tokenizing {} bytes as {}", source.len(), cli.language);

    let tokens = registry.tokenize(&cli.language, &source)?;

    match cli.format {
        OutputFormat::Text => {
            for token in &tokens {
                println!("{}", format_token(token));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tokens)
                .map_err(|e| Error::internal(format!("Failed to serialize tokens: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn format_token(token: &Token<'_>) -> String {
    format!(
        "{}:{}\t{}\t{:?}",
        token.line, token.column, token.kind, token.text
    )
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
