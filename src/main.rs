//! Wayfarer - Entry Point
//!
//! Runs a headless session with a scripted walk: wander the overworld,
//! head underground, explore the dungeon, then print what the fog reveals.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use wayfarer::data::{load_or_default, save_config};
use wayfarer::world::FogState;
use wayfarer::{ComponentKind, Game, InputSnapshot, WorldConfig};

/// Fixed simulation step
const FRAME_TIME: f32 = 1.0 / 60.0;

/// Ticks spent holding each scripted direction
const TICKS_PER_LEG: u32 = 45;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    export_config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                let value = it.next().context("--seed needs a value")?;
                args.seed = Some(value.parse().with_context(|| format!("bad seed {:?}", value))?);
            }
            "--export-config" => {
                let path = it.next().context("--export-config needs a path")?;
                args.export_config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {}", flag),
            path => args.config = Some(PathBuf::from(path)),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Wayfarer v{}", env!("CARGO_PKG_VERSION"));

    let args = parse_args()?;

    if let Some(path) = &args.export_config {
        save_config(&WorldConfig::default(), path)
            .with_context(|| format!("exporting defaults to {}", path.display()))?;
        log::info!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = load_or_default(args.config.as_deref());
    let mut game = Game::new(config, args.seed);

    let walk = |dir: (bool, bool, bool, bool)| InputSnapshot {
        up: dir.0,
        down: dir.1,
        left: dir.2,
        right: dir.3,
        enter: false,
    };
    let legs = [
        walk((false, false, false, true)),
        walk((false, true, false, false)),
        walk((false, false, true, false)),
        walk((true, false, false, false)),
    ];

    run_legs(&mut game, &legs);
    log_summary(&game);

    game.set_input(InputSnapshot { enter: true, ..Default::default() });
    game.update(FRAME_TIME);

    run_legs(&mut game, &legs);
    log_summary(&game);

    print_map(&game);
    Ok(())
}

fn run_legs(game: &mut Game, legs: &[InputSnapshot]) {
    for &input in legs {
        game.set_input(input);
        let mut bumps = 0;
        for _ in 0..TICKS_PER_LEG {
            game.update(FRAME_TIME);
            bumps += game.take_encounters().len();
        }
        if bumps > 0 {
            log::info!("Bumped into enemies {} times", bumps);
        }
    }
}

fn log_summary(game: &Game) {
    let fog = game.fog();
    log::info!(
        "{:?} after {} ticks: player at {:?}, {} visible / {} remembered tiles, {} enemies, darkness {:.2}",
        game.location(),
        game.ticks(),
        game.player_position().map(|p| p.tile(game.config().tile_size)),
        fog.count(FogState::Visible),
        fog.count(FogState::Remembered),
        game.registry().query(&[ComponentKind::Enemy]).len(),
        game.clock().darkness(),
    );
}

/// ASCII map with unseen tiles blanked out
fn print_map(game: &Game) {
    let tile_size = game.config().tile_size;
    let player = game.player_position().map(|p| p.tile(tile_size));
    let enemies: Vec<(i32, i32)> = game
        .registry()
        .query(&[ComponentKind::Enemy, ComponentKind::Position])
        .into_iter()
        .filter_map(|e| game.registry().get_component::<wayfarer::ecs::Position>(e))
        .map(|p| p.tile(tile_size))
        .collect();

    let map = game.map();
    for y in 0..map.height() {
        let row: String = (0..map.width())
            .map(|x| {
                if !game.fog().is_revealed(x, y) {
                    ' '
                } else if player == Some((x, y)) {
                    '@'
                } else if game.fog().is_visible(x, y) && enemies.contains(&(x, y)) {
                    'e'
                } else {
                    map.glyph(x, y).unwrap_or(' ')
                }
            })
            .collect();
        println!("{}", row.trim_end());
    }
}
