use clap::Parser;
use navstack::core::config::{self, NavstackConfig};
use navstack::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navstack", about = "Animated screen stack demo")]
struct Args {
    /// Text shown on the home screen
    #[arg(long)]
    home: Option<String>,

    /// Transition duration in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Config file to read instead of ~/.navstack/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        eprintln!("navstack: {e}; using defaults");
        NavstackConfig::default()
    });
    let resolved = config::resolve(&file_config, args.home.as_deref(), args.transition_ms);

    // Initialize file logger - writes to navstack.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = resolved.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("navstack.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!(
        "navstack starting up (transition {}ms, {} orientation)",
        resolved.transition_ms,
        resolved.orientation
    );

    tui::run(resolved)
}
