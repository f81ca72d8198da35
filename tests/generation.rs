//! End-to-end generation properties.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tilegen::pipeline::{
    BiomeStage, BorderStage, ClimateStage, GenerationStage, LandShapeStage, NoiseStage,
    TransitionStage, WaterZoneStage,
};
use tilegen::climate::ClimateConfig;
use tilegen::transitions::TRANSITION_PASSES;
use tilegen::water::enforce_shallow_border;
use tilegen::{
    generate, BiomeWeights, ConfigError, GenerationConfig, LandMass, PipelineError, Preset,
    Richness, Tile, World,
};

fn config(width: usize, height: usize, seed: i32) -> GenerationConfig {
    GenerationConfig::new(width, height).with_seed(seed)
}

#[test]
fn same_seed_same_map() {
    for land_mass in LandMass::ALL {
        let cfg = GenerationConfig {
            land_mass,
            ..config(40, 28, 99)
        };
        let a = generate(&cfg).unwrap();
        let b = generate(&cfg).unwrap();
        assert_eq!(a.grid, b.grid, "{land_mass} is not deterministic");
    }
}

#[test]
fn output_does_not_depend_on_thread_count() {
    let cfg = config(48, 32, 2024);
    let parallel = generate(&cfg).unwrap();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let serial = pool.install(|| generate(&cfg)).unwrap();
    assert_eq!(parallel.grid, serial.grid);
}

#[test]
fn different_seeds_differ() {
    let a = generate(&config(32, 32, 1)).unwrap();
    let b = generate(&config(32, 32, 2)).unwrap();
    assert_ne!(a.grid, b.grid);
}

#[test]
fn grid_covers_requested_size() {
    let map = generate(&config(37, 11, 5)).unwrap();
    assert_eq!(map.grid.width(), 37);
    assert_eq!(map.grid.height(), 11);
    assert_eq!(map.grid.tiles().len(), 37 * 11);
    assert_eq!(map.grid.rows().count(), 11);
}

#[test]
fn no_deep_water_touches_land_for_any_land_mass() {
    for land_mass in LandMass::ALL {
        for richness in [Richness::Basic, Richness::Full] {
            for seed in [0, 7, -31, 123_456] {
                let cfg = GenerationConfig {
                    land_mass,
                    richness,
                    island_count: 5,
                    ..config(36, 30, seed)
                };
                let map = generate(&cfg).unwrap();
                assert!(
                    map.grid.has_shallow_border(),
                    "{land_mass} {richness:?} seed {seed} has deep water next to land"
                );
            }
        }
    }
}

#[test]
fn generated_border_is_already_settled() {
    for land_mass in LandMass::ALL {
        for seed in [3, -8, 40_000] {
            let cfg = GenerationConfig {
                land_mass,
                ..config(34, 26, seed)
            };
            let map = generate(&cfg).unwrap();
            let mut grid = map.grid.clone();
            assert_eq!(
                enforce_shallow_border(&mut grid).unwrap(),
                0,
                "{land_mass} seed {seed} border changed on a second pass"
            );
            assert_eq!(grid, map.grid);
        }
    }
}

#[test]
fn no_deep_water_touches_land_for_presets() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let base = GenerationConfig::new(40, 30);
    for preset in Preset::ALL {
        let cfg = preset.apply_with_rng(&base, &mut rng);
        let map = generate(&cfg).unwrap();
        assert!(map.grid.has_shallow_border(), "preset {preset}");
        assert_eq!((map.grid.width(), map.grid.height()), (40, 30));
    }
}

#[test]
fn full_ocean_ratio_gives_all_ocean() {
    let cfg = GenerationConfig {
        ocean_ratio: 1.0,
        ..config(8, 8, 1)
    };
    let map = generate(&cfg).unwrap();
    assert!(map.grid.tiles().iter().all(|&t| t == Tile::Ocean));
}

#[test]
fn zero_weights_give_all_ocean() {
    let cfg = GenerationConfig {
        biome_weights: BiomeWeights::default(),
        ocean_ratio: 0.0,
        ..config(12, 12, 3)
    };
    let map = generate(&cfg).unwrap();
    assert_eq!(map.grid.count(Tile::Ocean), 144);
}

#[test]
fn pangaea_puts_land_in_the_middle() {
    let cfg = GenerationConfig {
        land_mass: LandMass::Pangaea,
        ocean_ratio: 0.35,
        ..config(16, 16, 42)
    };
    let map = generate(&cfg).unwrap();
    let grid = &map.grid;

    let land_near_center = (5..=10).any(|y| (5..=10).any(|x| grid.get(x, y).is_land()));
    assert!(land_near_center, "\n{}", grid.to_ascii());
    assert!(grid.get(0, 0).is_water());
    assert!(grid.get(15, 15).is_water());
}

#[test]
fn desert_only_weights_yield_only_desert_land() {
    let cfg = GenerationConfig {
        ocean_ratio: 0.0,
        biome_weights: BiomeWeights::basic(0.0, 0.0, 0.0, 1.0),
        ..config(20, 20, 8)
    };
    let map = generate(&cfg).unwrap();
    assert_eq!(map.grid.count(Tile::Desert), 400);
}

#[test]
fn raw_coast_ends_up_shallow() {
    let cfg = GenerationConfig {
        land_mass: LandMass::Archipelago,
        island_count: 6,
        ..config(48, 40, 77)
    };
    let mut world = World::new(cfg.width, cfg.height, 77);
    NoiseStage.execute(&mut world, &cfg).unwrap();
    LandShapeStage.execute(&mut world, &cfg).unwrap();
    ClimateStage::new(ClimateConfig::default()).execute(&mut world, &cfg).unwrap();
    BiomeStage.execute(&mut world, &cfg).unwrap();

    let raw = world.tiles.clone().unwrap();
    WaterZoneStage.execute(&mut world, &cfg).unwrap();
    TransitionStage::new(TRANSITION_PASSES).execute(&mut world, &cfg).unwrap();
    BorderStage.execute(&mut world, &cfg).unwrap();
    let done = world.tiles.unwrap();

    let mut coast = 0;
    for y in 0..raw.height() {
        for x in 0..raw.width() {
            if raw.get(x, y).is_water() && raw.any_neighbor(x, y, Tile::is_land) {
                coast += 1;
                assert_eq!(done.get(x, y), Tile::Shallow, "cell ({x}, {y})");
            }
        }
    }
    assert!(coast > 0);
}

#[test]
fn generate_matches_manual_stage_run() {
    let cfg = config(24, 24, 13);
    let map = generate(&cfg).unwrap();

    let mut world = World::new(24, 24, 13);
    tilegen::Pipeline::standard(cfg.clone()).run(&mut world).unwrap();
    assert_eq!(world.tiles.unwrap(), map.grid);
}

fn assert_rejected(cfg: GenerationConfig, expected: impl Fn(&ConfigError) -> bool) {
    match generate(&cfg) {
        Err(PipelineError::InvalidConfig(err)) => assert!(expected(&err), "got {err}"),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn invalid_configs_are_rejected() {
    assert_rejected(config(0, 8, 1), |e| {
        matches!(e, ConfigError::ZeroDimension { width: 0, height: 8 })
    });
    assert_rejected(
        GenerationConfig { noise_scale: 0.0, ..config(8, 8, 1) },
        |e| matches!(e, ConfigError::InvalidNoiseScale(_)),
    );
    assert_rejected(
        GenerationConfig { island_count: 0, ..config(8, 8, 1) },
        |e| matches!(e, ConfigError::InvalidIslandCount(0)),
    );
    assert_rejected(
        GenerationConfig { ocean_ratio: 1.5, ..config(8, 8, 1) },
        |e| matches!(e, ConfigError::OceanRatioOutOfRange(_)),
    );
    assert_rejected(
        GenerationConfig { moisture_bias: -2.0, ..config(8, 8, 1) },
        |e| matches!(e, ConfigError::BiasOutOfRange { name: "moisture", .. }),
    );
}

#[test]
fn stats_sum_to_one_hundred() {
    let map = generate(&config(30, 30, 4)).unwrap();
    let stats = map.stats();
    let sum: f32 = stats.counts().iter().map(|c| c.percent).sum();
    assert!((sum - 100.0).abs() < 1e-2);
    let rounded: u32 = stats.rounded_percentages().iter().map(|(_, p)| p).sum();
    assert!((95..=105).contains(&rounded));
}
