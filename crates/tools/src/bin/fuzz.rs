use anyhow::Result;
use clap::Parser;
use level_core::{GenerationParams, LevelGenerator, Pos, SeedChoice, Tile};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    cases: u32,
}

fn random_params(rng: &mut ChaCha8Rng) -> GenerationParams {
    GenerationParams {
        grid_width: 1 + (rng.next_u64() % 32) as u32,
        grid_height: 1 + (rng.next_u64() % 32) as u32,
        random_end: rng.next_u64() % 2 == 0,
        fixed_end: Pos {
            y: (rng.next_u64() % 48) as i32 - 8,
            x: (rng.next_u64() % 48) as i32 - 8,
        },
        end_max_height_percent: (rng.next_u64() % 120) as u8,
        seed: SeedChoice::Fixed(rng.next_u64()),
        path_thickness: (rng.next_u64() % 4) as u32,
        curve_percent: (rng.next_u64() % 120) as u8,
        star_count: (rng.next_u64() % 25) as u8,
        min_star_distance: (rng.next_u64() % 12) as u8,
        stars_connect_to_end: rng.next_u64() % 2 == 0,
        ..GenerationParams::default()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut degraded = 0_u32;

    for case in 0..args.cases {
        let params = random_params(&mut rng);
        let generator = LevelGenerator::new(params);
        let clamped = generator.params().clone();
        let result = generator.generate();
        let grid = &result.grid;

        // Invariants that must hold for every parameter combination.
        assert_eq!(
            grid.width() * grid.height(),
            (clamped.grid_width * clamped.grid_height) as usize,
            "case {case}: grid dimensions drifted from parameters"
        );
        assert!(
            grid.count(Tile::Star) <= usize::from(clamped.star_count),
            "case {case}: star cap exceeded"
        );
        if grid.width() * grid.height() > 1 {
            assert_eq!(grid.count(Tile::Start), 1, "case {case}: start marker count");
            assert_eq!(grid.count(Tile::End), 1, "case {case}: end marker count");
        }

        let stars: Vec<Pos> =
            grid.positions().filter(|&pos| grid.tile_at(pos) == Tile::Star).collect();
        let min_squared =
            u64::from(clamped.min_star_distance) * u64::from(clamped.min_star_distance);
        for (index, &left) in stars.iter().enumerate() {
            for &right in &stars[index + 1..] {
                assert!(
                    left.distance_squared(right) >= min_squared,
                    "case {case}: star spacing violated"
                );
            }
        }

        if result.events.is_empty() && grid.width() * grid.height() > 1 {
            assert!(
                result.start_connects_to_end(),
                "case {case}: clean generation must connect start to end (seed {})",
                result.used_seed
            );
        } else {
            degraded += 1;
        }
    }

    println!("Fuzzing completed successfully ({degraded} degraded levels reported events).");
    Ok(())
}
