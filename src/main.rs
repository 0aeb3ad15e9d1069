//! Stock Tracker - bounded inventory with JSON persistence
//!
//! Loads any prior snapshot at startup, runs an interactive console against
//! the in-memory store, auto-saves every `--save-interval` seconds, and
//! performs one final synchronous save on exit (quit command or Ctrl-C).

use clap::Parser;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stock_tracker::{console, persist, AutosaveTask, SharedInventory};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Bounded inventory tracker with JSON persistence and periodic auto-save
#[derive(Parser, Debug)]
#[command(name = "stock_tracker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the inventory snapshot file
    #[arg(short, long, default_value_t = default_data_path())]
    data_file: String,

    /// Maximum number of products the inventory can hold
    #[arg(short, long, default_value_t = 100)]
    capacity: usize,

    /// Auto-save interval in seconds
    #[arg(long, default_value_t = 30)]
    save_interval: u64,
}

/// Returns the default snapshot path: ~/.local/share/stock_tracker/inventory.json
fn default_data_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stock_tracker")
        .join("inventory.json")
        .to_string_lossy()
        .to_string()
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let data_file = PathBuf::from(&args.data_file);

    log::info!("Starting stock_tracker...");
    log::info!("Snapshot path: {}", data_file.display());

    // Ensure parent directory exists
    if let Some(parent) = data_file.parent() {
        if !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::error!("Failed to create data directory: {}", e);
                std::process::exit(1);
            }
            log::info!("Created directory: {}", parent.display());
        }
    }

    let inventory: SharedInventory = Arc::new(Mutex::new(persist::load(
        &data_file,
        args.capacity,
    )));

    let autosave = AutosaveTask::spawn(
        Arc::clone(&inventory),
        data_file.clone(),
        Duration::from_secs(args.save_interval),
    );

    run_console(&inventory).await;

    // Stop the background saver first so it cannot race the final save
    autosave.stop().await;
    let last = inventory.lock().unwrap().clone();
    match persist::save(&last, &data_file) {
        Ok(()) => log::info!("Final save complete, goodbye"),
        Err(e) => log::error!("Final save failed: {}", e),
    }
}

/// Read commands from stdin until the user quits or the input closes.
/// Ctrl-C also ends the loop so the shutdown path still runs.
async fn run_console(inventory: &SharedInventory) {
    println!("{}", console::USAGE);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted, shutting down");
                break;
            }
        };

        match line {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match console::parse(&line) {
                    Ok(command) => {
                        if !console::execute(inventory, command) {
                            break;
                        }
                    }
                    Err(msg) => println!("{}", msg),
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}
