use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use level_core::{
    GenerationParams, GenerationResult, Grid, LevelFile, LevelGenerator, Pos, SeedChoice, Tile,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a level and print an ASCII render
    Generate(GenerateArgs),
    /// Render a persisted level file
    Show {
        /// Path to the level JSON file
        file: PathBuf,
    },
    /// Check structural invariants of a persisted level file
    Verify {
        /// Path to the level JSON file
        file: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 10)]
    width: u32,
    #[arg(long, default_value_t = 10)]
    height: u32,
    /// Fixed seed; omit for a fresh runtime seed
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 50)]
    curve_percent: u8,
    #[arg(long, default_value_t = 1)]
    path_thickness: u32,
    #[arg(long, default_value_t = 3)]
    star_count: u8,
    #[arg(long, default_value_t = 3)]
    min_star_distance: u8,
    #[arg(long, default_value_t = false)]
    stars_connect_to_end: bool,
    /// Fix the end cell instead of drawing it at random (requires --end-y)
    #[arg(long, requires = "end_y")]
    end_x: Option<i32>,
    #[arg(long, requires = "end_x")]
    end_y: Option<i32>,
    #[arg(long, default_value_t = 30)]
    end_max_height_percent: u8,
    /// Also write the level to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => generate(&args),
        Commands::Show { file } => show(&file),
        Commands::Verify { file } => verify(&file),
    }
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let fixed_end = match (args.end_x, args.end_y) {
        (Some(x), Some(y)) => Some(Pos { y, x }),
        _ => None,
    };
    let params = GenerationParams {
        grid_width: args.width,
        grid_height: args.height,
        random_end: fixed_end.is_none(),
        fixed_end: fixed_end.unwrap_or(Pos { y: 0, x: 0 }),
        end_max_height_percent: args.end_max_height_percent,
        seed: match args.seed {
            Some(seed) => SeedChoice::Fixed(seed),
            None => SeedChoice::Random,
        },
        path_thickness: args.path_thickness,
        curve_percent: args.curve_percent,
        star_count: args.star_count,
        min_star_distance: args.min_star_distance,
        stars_connect_to_end: args.stars_connect_to_end,
        ..GenerationParams::default()
    };

    let result = LevelGenerator::new(params.clone()).generate();
    println!("used seed: {}", result.used_seed);
    for event in &result.events {
        println!("event: {event:?}");
    }
    print!("{}", render(&result.grid));

    if let Some(out) = &args.out {
        let file = LevelFile::from_result(&params, &result);
        file.write_atomic(out)
            .with_context(|| format!("failed to write level file: {}", out.display()))?;
        println!("wrote {}", out.display());
    }
    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let file = LevelFile::load(path)
        .with_context(|| format!("failed to load level file: {}", path.display()))?;
    println!("used seed: {}", file.used_seed);
    print!("{}", render(&file.into_grid()));
    Ok(())
}

fn verify(path: &Path) -> Result<()> {
    let file = LevelFile::load(path)
        .with_context(|| format!("failed to load level file: {}", path.display()))?;
    check_level(file)?;
    println!("ok: {}", path.display());
    Ok(())
}

fn check_level(file: LevelFile) -> Result<()> {
    // Generation clamps its parameters once on construction; the recorded
    // params are the raw knobs, so clamp them the same way here or a level
    // written by `generate` could fail its own verification.
    let params = file.params.clone().clamped();
    let used_seed = file.used_seed;
    let grid = file.into_grid();

    if grid.count(Tile::Start) != 1 {
        bail!("expected exactly one Start tile, found {}", grid.count(Tile::Start));
    }
    if grid.count(Tile::End) != 1 {
        bail!("expected exactly one End tile, found {}", grid.count(Tile::End));
    }
    if grid.count(Tile::Star) > usize::from(params.star_count) {
        bail!(
            "found {} Star tiles, parameters allow at most {}",
            grid.count(Tile::Star),
            params.star_count
        );
    }

    let stars: Vec<Pos> = grid.positions().filter(|&pos| grid.tile_at(pos) == Tile::Star).collect();
    let min_squared = u64::from(params.min_star_distance) * u64::from(params.min_star_distance);
    for (index, &left) in stars.iter().enumerate() {
        for &right in &stars[index + 1..] {
            if left.distance_squared(right) < min_squared {
                bail!("stars {left:?} and {right:?} violate the minimum spacing");
            }
        }
    }

    let result = GenerationResult { grid, used_seed, events: Vec::new() };
    if !result.start_connects_to_end() {
        bail!("no walkable route from Start to End");
    }

    Ok(())
}

fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(match grid.tile_at(Pos { y: y as i32, x: x as i32 }) {
                Tile::Wall => '#',
                Tile::Floor => '.',
                Tile::Start => 'S',
                Tile::End => 'E',
                Tile::Star => '*',
                Tile::Ice => '~',
            });
        }
        out.push('\n');
    }
    out
}
