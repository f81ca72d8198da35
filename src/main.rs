//! Tilegen CLI - deterministic biome tile map generator.
//!
//! Generates a categorical tile grid from a seed and a handful of shaping
//! parameters, then prints it or exports previews.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tilegen::config::{ConfigError, GenerationConfig, Preset};
use tilegen::export::{export_field_png, export_tile_map_png, FieldPngOptions, TileMapOptions};
use tilegen::landmass::LandMass;
use tilegen::pipeline::{generate, GeneratedMap};
use tilegen::{BiomeWeights, Richness, Tile};

/// Deterministic biome tile map generator.
#[derive(Parser)]
#[command(name = "tilegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new tile map.
    Generate {
        /// Map width in cells.
        #[arg(long)]
        width: Option<usize>,

        /// Map height in cells.
        #[arg(long)]
        height: Option<usize>,

        /// Seed for reproducible generation (random if omitted).
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Start from a named preset (see `tilegen presets`).
        #[arg(short, long)]
        preset: Option<Preset>,

        /// Load the base configuration from a JSON file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Land shape: pangaea, continents, archipelago, lakes, fractal.
        #[arg(long)]
        land_mass: Option<LandMass>,

        /// Share of the elevation range below sea level (0-1).
        #[arg(long)]
        ocean_ratio: Option<f32>,

        /// Noise feature size in cells.
        #[arg(long)]
        noise_scale: Option<f32>,

        /// Elevation noise octaves.
        #[arg(long)]
        octaves: Option<u32>,

        /// Land centers for continents and archipelago.
        #[arg(long)]
        islands: Option<u32>,

        /// Global temperature shift (-1 to 1).
        #[arg(long, allow_negative_numbers = true)]
        temperature_bias: Option<f32>,

        /// Global moisture shift (-1 to 1).
        #[arg(long, allow_negative_numbers = true)]
        moisture_bias: Option<f32>,

        /// Use the four-biome set (no taiga or tundra).
        #[arg(long)]
        basic: bool,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "map")]
        name: String,

        /// Export an RGB preview of the tile map.
        #[arg(long)]
        png: bool,

        /// Pixels per cell in the tile map preview.
        #[arg(long, default_value = "4")]
        png_scale: u32,

        /// Export the shaped elevation as a 16-bit PNG.
        #[arg(long)]
        elevation_png: bool,

        /// Print the map as ASCII glyphs.
        #[arg(long)]
        ascii: bool,

        /// Write tile statistics as JSON.
        #[arg(long)]
        stats_json: bool,

        /// Write the resolved configuration as JSON.
        #[arg(long)]
        save_config: bool,
    },

    /// List the built-in presets.
    Presets,

    /// Display information about a map configuration.
    Info {
        /// Map width in cells.
        #[arg(long, default_value = "64")]
        width: usize,

        /// Map height in cells.
        #[arg(long, default_value = "64")]
        height: usize,
    },
}

/// Overrides applied on top of the base configuration.
struct Overrides {
    width: Option<usize>,
    height: Option<usize>,
    seed: Option<i32>,
    land_mass: Option<LandMass>,
    ocean_ratio: Option<f32>,
    noise_scale: Option<f32>,
    octaves: Option<u32>,
    islands: Option<u32>,
    temperature_bias: Option<f32>,
    moisture_bias: Option<f32>,
    basic: bool,
}

/// Where the generated map goes.
struct Outputs {
    dir: PathBuf,
    name: String,
    png: bool,
    png_scale: u32,
    elevation_png: bool,
    ascii: bool,
    stats_json: bool,
    save_config: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            seed,
            preset,
            config,
            land_mass,
            ocean_ratio,
            noise_scale,
            octaves,
            islands,
            temperature_bias,
            moisture_bias,
            basic,
            output,
            name,
            png,
            png_scale,
            elevation_png,
            ascii,
            stats_json,
            save_config,
        } => {
            let overrides = Overrides {
                width,
                height,
                seed,
                land_mass,
                ocean_ratio,
                noise_scale,
                octaves,
                islands,
                temperature_bias,
                moisture_bias,
                basic,
            };
            let outputs = Outputs {
                dir: output,
                name,
                png,
                png_scale,
                elevation_png,
                ascii,
                stats_json,
                save_config,
            };
            run_generate(config.as_deref(), preset, overrides, outputs);
        }
        Commands::Presets => run_presets(),
        Commands::Info { width, height } => run_info(width, height),
    }
}

/// Console logging to stderr; `RUST_LOG` overrides the `info` default.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("Error {}: {}", context, err);
    process::exit(1);
}

fn build_config(
    config_path: Option<&Path>,
    preset: Option<Preset>,
    o: Overrides,
) -> Result<GenerationConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(w) = o.width {
        config.width = w;
    }
    if let Some(h) = o.height {
        config.height = h;
    }
    if let Some(preset) = preset {
        config = preset.apply(&config);
    }

    if o.seed.is_some() {
        config.seed = o.seed;
    }
    if let Some(v) = o.land_mass {
        config.land_mass = v;
    }
    if let Some(v) = o.ocean_ratio {
        config.ocean_ratio = v;
    }
    if let Some(v) = o.noise_scale {
        config.noise_scale = v;
    }
    if let Some(v) = o.octaves {
        config.noise_octaves = v;
    }
    if let Some(v) = o.islands {
        config.island_count = v;
    }
    if let Some(v) = o.temperature_bias {
        config.temperature_bias = v;
    }
    if let Some(v) = o.moisture_bias {
        config.moisture_bias = v;
    }
    if o.basic {
        config.richness = Richness::Basic;
    }
    Ok(config)
}

fn run_generate(config_path: Option<&Path>, preset: Option<Preset>, overrides: Overrides, out: Outputs) {
    let config = build_config(config_path, preset, overrides).unwrap_or_else(|e| fail("loading config", e));

    println!("Tilegen - Biome Tile Map Generator");
    println!("==================================");
    println!("Size: {}x{}", config.width, config.height);
    println!("Land mass: {}", config.land_mass);
    if let Some(preset) = preset {
        println!("Preset: {}", preset);
    }

    let start = Instant::now();
    let map = generate(&config).unwrap_or_else(|e| fail("generating map", e));
    println!("Seed: {}", map.seed());
    println!("Generated in {:.2?}", start.elapsed());

    print_stats(&map);

    if out.ascii {
        println!();
        print!("{}", map.grid.to_ascii());
    }

    if out.png || out.elevation_png || out.stats_json || out.save_config {
        export_outputs(&map, &out);
    }
}

fn print_stats(map: &GeneratedMap) {
    println!();
    println!("Composition:");
    for (tile, percent) in map.stats().rounded_percentages() {
        println!("  {:<8} {:>3}%", tile.name(), percent);
    }
}

fn export_outputs(map: &GeneratedMap, out: &Outputs) {
    std::fs::create_dir_all(&out.dir).unwrap_or_else(|e| fail("creating output directory", e));
    println!();
    println!("Exporting to {}", out.dir.display());

    if out.png {
        let path = out.dir.join(format!("{}.png", out.name));
        let options = TileMapOptions {
            scale: out.png_scale,
            ..Default::default()
        };
        export_tile_map_png(&map.grid, &path, &options).unwrap_or_else(|e| fail("exporting tile map", e));
        println!("  {}", path.display());
    }

    if out.elevation_png {
        match &map.elevation {
            Some(elevation) => {
                let path = out.dir.join(format!("{}_elevation.png", out.name));
                export_field_png(elevation, &path, &FieldPngOptions::default())
                    .unwrap_or_else(|e| fail("exporting elevation", e));
                println!("  {}", path.display());
            }
            None => eprintln!("Warning: no elevation field to export"),
        }
    }

    if out.stats_json {
        let path = out.dir.join(format!("{}_stats.json", out.name));
        let json = serde_json::to_string_pretty(&map.stats()).unwrap_or_else(|e| fail("serializing stats", e));
        std::fs::write(&path, json).unwrap_or_else(|e| fail("writing stats", e));
        println!("  {}", path.display());
    }

    if out.save_config {
        let path = out.dir.join(format!("{}_config.json", out.name));
        let json = map.config.to_json_string().unwrap_or_else(|e| fail("serializing config", e));
        std::fs::write(&path, json).unwrap_or_else(|e| fail("writing config", e));
        println!("  {}", path.display());
    }
}

fn run_presets() {
    println!("Available presets:");
    for preset in Preset::ALL {
        println!("  {:<14} {}", preset.name(), preset.description());
    }
}

fn run_info(width: usize, height: usize) {
    let cells = width as u64 * height as u64;
    let defaults = GenerationConfig::new(width, height);
    let weights: BiomeWeights = defaults.biome_weights;

    println!("Tilegen - Map Configuration Info");
    println!("================================");
    println!();
    println!("Size: {}x{} ({} cells)", width, height, cells);
    println!();
    println!("Memory usage (in-memory):");
    println!("  Scalar fields (3 x f32): {:>10} bytes", cells * 4 * 3);
    println!("  Tile grid (u8):          {:>10} bytes", cells);
    println!();
    println!("Preview sizes:");
    println!("  Tile map PNG (RGB8):     {:>10} bytes uncompressed", cells * 3);
    println!("  Elevation PNG (L16):     {:>10} bytes uncompressed", cells * 2);
    println!();
    println!("Default biome shares:");
    let total = weights.total();
    for (tile, weight) in weights.iter() {
        println!("  {:<8} {:>5.1}%", tile.name(), weight / total * 100.0);
    }
    println!();
    println!(
        "Water: {} within 1 cell of land, {} up to {} cells, {} beyond",
        Tile::Shallow,
        Tile::Sea,
        defaults.richness.sea_depth(),
        Tile::Ocean
    );
}
