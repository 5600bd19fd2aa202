use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mapgen_core::mapgen::RELEASED_SEEDS;
use mapgen_core::{GeneratedMap, MapConfig, generate_map};
use tracing_subscriber::EnvFilter;

mod preview;

#[derive(Parser)]
#[command(author, version, about = "Generate and inspect room-grid maps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a text preview of one map
    Preview(MapArgs),
    /// Dump one map as JSON
    Json(MapArgs),
    /// Generate every released level
    Levels {
        #[command(flatten)]
        map: MapArgs,
        #[arg(long, value_enum, default_value_t = Format::Preview)]
        format: Format,
        /// Write one file per level into this directory instead of stdout
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Preview,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Preview => "txt",
            Format::Json => "json",
        }
    }
}

#[derive(Args)]
struct MapArgs {
    /// TOML file with map settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u32>,
    #[arg(long)]
    map_width: Option<usize>,
    #[arg(long)]
    map_height: Option<usize>,
    #[arg(long)]
    room_width: Option<usize>,
    #[arg(long)]
    room_height: Option<usize>,
}

impl MapArgs {
    fn resolve(&self) -> Result<MapConfig> {
        let mut config = match &self.config {
            Some(path) => MapConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => MapConfig::default(),
        };
        config.seed = self.seed.unwrap_or(config.seed);
        config.map_width = self.map_width.unwrap_or(config.map_width);
        config.map_height = self.map_height.unwrap_or(config.map_height);
        config.room_width = self.room_width.unwrap_or(config.room_width);
        config.room_height = self.room_height.unwrap_or(config.room_height);
        Ok(config)
    }
}

fn generate(config: MapConfig) -> Result<GeneratedMap> {
    let map = generate_map(config)
        .with_context(|| format!("Invalid map settings for seed {}", config.seed))?;
    tracing::info!(
        seed = config.seed,
        rooms = map.rooms.len(),
        reachable = map.visited.len(),
        fingerprint = %format!("{:016x}", map.fingerprint()),
        "map generated"
    );
    Ok(map)
}

fn render(map: &GeneratedMap, format: Format) -> Result<String> {
    match format {
        Format::Preview => Ok(preview::render(map)),
        Format::Json => {
            serde_json::to_string_pretty(map).context("Failed to serialize map to JSON")
        }
    }
}

fn level_file_name(level: usize, format: Format) -> String {
    format!("level{}.{}", level + 1, format.extension())
}

fn write_levels(base: MapConfig, format: Format, out_dir: Option<&Path>) -> Result<()> {
    for (level, seed) in RELEASED_SEEDS.into_iter().enumerate() {
        let map = generate(MapConfig { seed, ..base })?;
        let text = render(&map, format)?;
        match out_dir {
            Some(dir) => {
                let path = dir.join(level_file_name(level, format));
                fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            None => {
                let fingerprint = map.fingerprint();
                println!("Level {} (seed {seed}, fingerprint {fingerprint:016x})", level + 1);
                println!("{text}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Preview(args) => {
            let map = generate(args.resolve()?)?;
            println!("Fingerprint: {:016x}", map.fingerprint());
            print!("{}", render(&map, Format::Preview)?);
        }
        Command::Json(args) => {
            let map = generate(args.resolve()?)?;
            println!("{}", render(&map, Format::Json)?);
        }
        Command::Levels { map, format, out_dir } => {
            if let Some(dir) = &out_dir {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            write_levels(map.resolve()?, format, out_dir.as_deref())?;
        }
    }
    Ok(())
}
