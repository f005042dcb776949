//! Command line front end for bounded Game of Life worlds

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use life_worlds::{
    config::{CliOverrides, Settings},
    driver::Scenario,
    game_of_life::save_board_to_file,
    utils::{ColorOutput, TerminalSink},
    world::GenerationStore,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_worlds")]
#[command(about = "Bounded Game of Life simulator with generation history")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a world, iterate it and display a range of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Scenario descriptor (JSON); flags below override its fields
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// World id
        #[arg(short, long)]
        world: Option<u64>,

        /// Number of generations to compute
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Initial configuration (0 random, 1 oscillators, 2 still lifes,
        /// 3 gliders, 4 glider gun, 5 mixed)
        #[arg(long)]
        initial: Option<i64>,

        #[arg(long)]
        rows: Option<usize>,

        #[arg(long)]
        columns: Option<usize>,

        /// Rule string, e.g. 2.3/3
        #[arg(long)]
        rule: Option<String>,

        /// First generation to display
        #[arg(long)]
        from: Option<usize>,

        /// Last generation to display
        #[arg(long)]
        to: Option<usize>,

        /// Top-left window corner as "<col>,<row>"
        #[arg(long)]
        from_vector: Option<String>,

        /// Bottom-right window corner as "<col>,<row>"
        #[arg(long)]
        to_vector: Option<String>,

        #[arg(long)]
        alive: Option<char>,

        #[arg(long)]
        dead: Option<char>,

        /// Seconds between frames
        #[arg(long)]
        refresh: Option<f64>,

        /// Fixed random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,

        /// Seed generation 0 from a text board of 0/1 rows instead of --initial
        #[arg(long)]
        board: Option<PathBuf>,

        /// Write the last generation as a text board here
        #[arg(long)]
        export: Option<PathBuf>,

        /// Write the generation history snapshot (JSON) here
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Create a default configuration and sample scenarios
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            scenario,
            world,
            iterations,
            initial,
            rows,
            columns,
            rule,
            from,
            to,
            from_vector,
            to_vector,
            alive,
            dead,
            refresh,
            seed,
            no_clear,
            board,
            export,
            save,
        } => {
            let mut descriptor = match scenario {
                Some(path) => Scenario::load_from_file(&path)?,
                None => Scenario::default(),
            };
            descriptor.id = world.or(descriptor.id);
            descriptor.iterations = iterations.or(descriptor.iterations);
            descriptor.config = initial.or(descriptor.config);
            descriptor.rows = rows.or(descriptor.rows);
            descriptor.columns = columns.or(descriptor.columns);
            descriptor.from = from.or(descriptor.from);
            descriptor.to = to.or(descriptor.to);
            descriptor.from_vector = from_vector.or(descriptor.from_vector);
            descriptor.to_vector = to_vector.or(descriptor.to_vector);
            descriptor.alive = alive.or(descriptor.alive);
            descriptor.dead = dead.or(descriptor.dead);
            descriptor.board = board.or(descriptor.board);

            let overrides = CliOverrides {
                rule,
                seed,
                refresh_seconds: refresh,
                ..Default::default()
            };
            run_command(config, descriptor, overrides, !no_clear, export, save)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    descriptor: Scenario,
    overrides: CliOverrides,
    clear: bool,
    export: Option<PathBuf>,
    save: Option<PathBuf>,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let mut simulator = descriptor.simulator(&settings);
    let start_time = Instant::now();
    let mut sink = TerminalSink::new(clear);
    let report = descriptor
        .run_on(&mut simulator, &settings, &mut sink)
        .context("Scenario failed")?;

    if report.status {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "World {}: {} generations, {} frames in {:.3}s",
                report.world,
                report.last_generation,
                report.frames_shown,
                start_time.elapsed().as_secs_f64()
            ))
        );
    } else {
        println!(
            "{}",
            ColorOutput::error(&format!(
                "World {}: {}",
                report.world,
                report.message.as_deref().unwrap_or("display failed")
            ))
        );
    }

    if let Some(path) = export {
        let last = simulator
            .store()
            .get_generation(report.world, report.last_generation)?;
        save_board_to_file(last, &path)?;
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Generation {} exported to {}",
                report.last_generation,
                path.display()
            ))
        );
    }

    if let Some(path) = save {
        let store = simulator.into_store();
        store
            .save_to_file(&path)
            .with_context(|| format!("Failed to save history to {}", path.display()))?;
        println!(
            "{}",
            ColorOutput::info(&format!(
                "History of worlds {} saved to {}",
                store.world_ids().iter().join(", "),
                path.display()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    let scenario_dir = directory.join("scenarios");

    for dir in [&config_dir, &scenario_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let samples = [
        ("oscillators", 1, 15, 15, 6),
        ("still_lifes", 2, 15, 15, 10),
        ("gliders", 3, 20, 20, 24),
        ("glider_gun", 4, 30, 50, 60),
        ("mixed", 5, 40, 80, 100),
    ];
    for (name, config, rows, columns, iterations) in samples {
        let path = scenario_dir.join(format!("{}.json", name));
        if path.exists() && !force {
            println!("Skipped: {} (already exists)", path.display());
            continue;
        }
        Scenario {
            config: Some(config),
            rows: Some(rows),
            columns: Some(columns),
            iterations: Some(iterations),
            ..Default::default()
        }
        .save_to_file(&path)?;
        println!("Created: {}", path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: cargo run -- run --scenario scenarios/gliders.json");

    Ok(())
}
