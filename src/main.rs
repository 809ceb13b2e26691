use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use depmap::config::AppConfig;
use depmap::core::CodebaseAnalyzer;
use depmap::server;

#[derive(Debug, Parser)]
#[command(
    name = "depmap",
    version = "0.1.0",
    author = "depmap developers",
    about = "File-level dependency graph extraction with LLM-assisted documentation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the pipeline once and print the graph
    Analyze {
        /// Root directory to scan
        #[arg(short, long, value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// File name suffix to include
        #[arg(short, long, value_name = "EXT", default_value = ".js")]
        extension: String,

        /// Output file for the graph JSON
        #[arg(short, long, value_name = "FILE", default_value = "output/graph.json")]
        output: PathBuf,
    },
    /// Serve the analysis HTTP API
    Serve {
        /// Root directory to scan on each /analyze request
        #[arg(short, long, value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// File name suffix to include
        #[arg(short, long, value_name = "EXT", default_value = ".js")]
        extension: String,

        /// Output file for the graph JSON
        #[arg(short, long, value_name = "FILE", default_value = "output/graph.json")]
        output: PathBuf,

        /// Listen port
        #[arg(short, long, default_value_t = 3000)]
        port: u16,

        /// Model for the documentation endpoints
        #[arg(long, value_name = "MODEL", default_value = "gemini-1.5-pro")]
        model: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            input,
            extension,
            output,
        } => run_analyze(input, extension, output),
        Command::Serve {
            input,
            extension,
            output,
            port,
            model,
        } => {
            let config = AppConfig {
                root: input,
                extension,
                output,
                port,
                gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
                gemini_model: model,
            };
            server::serve(config).await
        }
    }
}

fn run_analyze(input: PathBuf, extension: String, output: PathBuf) -> Result<()> {
    let start = Instant::now();

    println!("depmap - dependency graph extraction");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    let config = AppConfig {
        root: input,
        extension,
        output,
        ..AppConfig::default()
    };

    let analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze_and_persist(&config)?;

    println!("{}", serde_json::to_string_pretty(&graph)?);
    println!(
        "Analyzed {} files in {:.2}s",
        graph.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
