//! BioGuide: India biomaterials market advisor.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bioguide_chat::LLMConfig;
use bioguide_server::{build_router, load_knowledge, repl, AppState};

fn resolve_data_dir() -> PathBuf {
    std::env::var("BIOGUIDE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn print_help() {
    println!("BioGuide - India biomaterials market advisor");
    println!();
    println!("Usage: bioguide [command]");
    println!();
    println!("Commands:");
    println!("  (none)       Start the HTTP server");
    println!("  repl         Chat with the advisor in this terminal");
    println!("  help         Show this help message");
    println!();
    println!("Environment:");
    println!("  PORT, BIOGUIDE_DATA_DIR, BIOGUIDE_DOCUMENT,");
    println!("  BIOGUIDE_DELAY_MIN_MS, BIOGUIDE_DELAY_MAX_MS,");
    println!("  BIOGUIDE_LIST_ITEMS, BIOGUIDE_TEXT_CHARS,");
    println!("  HF_API_TOKEN, OPENAI_API_KEY, GROQ_API_KEY");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let data_dir = resolve_data_dir();
    let config = bioguide_core::BioGuideConfig::from_env(&data_dir)?;

    if args.len() > 1 {
        match args[1].as_str() {
            "repl" => {
                let knowledge = load_knowledge(&config);
                let stdin = std::io::stdin();
                repl::run(knowledge, config.limits, stdin.lock(), std::io::stdout())?;
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'bioguide help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    info!("Data directory: {}", data_dir.display());

    // Knowledge is loaded before the listener binds
    let knowledge = load_knowledge(&config);
    let llm_config = LLMConfig::load(&config.data_paths.llm_config_file);
    match llm_config.resolve_provider() {
        Some(r) => info!("LLM provider: {} ({})", r.provider, r.model),
        None => info!("No LLM provider configured; /api/ask is disabled"),
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config, knowledge, llm_config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("BioGuide server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
