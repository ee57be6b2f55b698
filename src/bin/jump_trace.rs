//! Headless jump trace
//!
//! Runs the player controller without a window and prints one line per tick,
//! handy for tuning jump timing and checking the state machine by eye.
//!
//! Usage:
//!   cargo run --bin jump_trace -- --ticks 12 --dt 0.05 --hold 3 --run 1 --floor
//!
//! With `--floor` the player starts grounded on a floor at y = 0 and lands on
//! it again; without it the player starts grounded and falls forever.

use std::path::PathBuf;

use bevy::prelude::Vec2;
use clap::Parser;
use pixel_legends::core::config::{GameConfig, PlayerConfig};
use pixel_legends::player::{
    resolve_floor_contact, BaseMotion, PlayerEffect, PlayerMotionController,
};

#[derive(Parser, Debug)]
#[command(about = "Print a tick-by-tick trace of the player jump state machine", version)]
struct Args {
    #[arg(long, default_value_t = 20)]
    ticks: u32,
    /// Seconds per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Ticks the jump key is held, starting at tick 1.
    #[arg(long, default_value_t = 0)]
    hold: u32,
    /// Horizontal input axis applied every tick (-1, 0, 1).
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    run: f32,
    /// RON config to take player tuning from.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep a floor at y = 0 and land on it.
    #[arg(long)]
    floor: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !(args.dt >= 0.0) {
        anyhow::bail!("--dt must be >= 0 (got {})", args.dt);
    }
    if !(-1.0..=1.0).contains(&args.run) {
        anyhow::bail!("--run must be within -1..=1 (got {})", args.run);
    }
    let player_cfg = match &args.config {
        Some(path) => {
            GameConfig::load_from_file(path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?
                .player
        }
        None => PlayerConfig::default(),
    };

    let mut controller = PlayerMotionController::from_config(&player_cfg, Vec2::ZERO);
    controller.set_grounded(true);

    println!("tick  state         t_jump   vel_y    pos_y    facing  effects");
    for tick in 1..=args.ticks {
        controller.request_run(args.run);
        controller.request_jump(tick <= args.hold);
        let effects = controller.update(args.dt, &BaseMotion);
        if args.floor {
            resolve_floor_contact(&mut controller, 0.0);
        }
        let t_jump = if controller.jump_state().tracks_jump_time() {
            format!("{:.3}", controller.time_jumping())
        } else {
            "-".to_string()
        };
        let effects: Vec<String> = effects
            .iter()
            .map(|e| match e {
                PlayerEffect::StartDust { at } => format!("start_dust@({:.2},{:.2})", at.x, at.y),
                PlayerEffect::AllowDustCompletion => "allow_completion".to_string(),
            })
            .collect();
        println!(
            "{:>4}  {:<12}  {:>6}  {:>7.3}  {:>7.3}  {:<6}  {}",
            tick,
            controller.jump_state().label(),
            t_jump,
            controller.velocity().y,
            controller.position().y,
            format!("{:?}", controller.view_direction()),
            effects.join(",")
        );
    }
    Ok(())
}
