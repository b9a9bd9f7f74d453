//! Sparse Life CLI - Animate a seeded simulation in the terminal.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use sparse_life::{
    compute::{SimulationEngine, SimulationStats},
    render::render_status,
    schema::{Seed, SimulationConfig},
};

/// Clear screen and move the cursor home.
const CLEAR: &str = "\x1B[2J\x1B[H";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--example") => {
            print_example_config();
            return;
        }
        Some("--help" | "-h") => {
            print_usage(&args[0]);
            return;
        }
        _ => {}
    }

    let (config, seed) = match args.get(1) {
        Some(path) => load(&PathBuf::from(path)),
        None => (SimulationConfig::default(), Seed::default()),
    };

    if let Err(e) = config.validate().and_then(|_| seed.validate()) {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst)) {
            log::warn!("Ctrl-C handler not installed: {}", e);
        }
    }

    let mut engine = SimulationEngine::from_seed(&seed);
    let delay = Duration::from_millis(config.delay_ms);
    log::info!(
        "seeded {} stamps, {} cells alive",
        seed.stamps.len(),
        engine.population()
    );

    loop {
        if interrupted.load(Ordering::SeqCst) {
            println!();
            break;
        }

        if let Err(e) = draw(&engine, &config) {
            log::error!("failed to write frame: {}", e);
            break;
        }

        engine.step();
        if engine.is_finished() {
            break;
        }
        if config
            .max_generations
            .is_some_and(|max| engine.generation() >= max)
        {
            break;
        }

        thread::sleep(delay);
    }

    let stats = SimulationStats::from_engine(&engine);
    log::info!(
        "stopped at generation {} with {} cells alive (converged: {})",
        stats.generation,
        stats.population,
        stats.finished
    );
}

fn draw(engine: &SimulationEngine, config: &SimulationConfig) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}{}", CLEAR, render_status(engine, &config.render))?;
    out.flush()
}

/// Read `config.json` and its sibling `config.seed.json`.
fn load(config_path: &Path) -> (SimulationConfig, Seed) {
    let config_str = fs::read_to_string(config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        log::debug!("no seed at {}, using default", seed_path.display());
        Seed::default()
    };

    (config, seed)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.json]", program);
    eprintln!();
    eprintln!("Animate Conway's Game of Life on an unbounded grid.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to configuration file (default settings if omitted)");
    eprintln!("               A seed is read from config.seed.json when present.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --example    Print an example configuration and seed");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for per-generation logging.");
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    match (
        serde_json::to_string_pretty(&config),
        serde_json::to_string_pretty(&seed),
    ) {
        (Ok(config_json), Ok(seed_json)) => {
            println!("Example configuration (config.json):");
            println!("{}", config_json);
            println!();
            println!("Example seed (config.seed.json):");
            println!("{}", seed_json);
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error serializing example: {}", e);
            std::process::exit(1);
        }
    }
}
