//! survivor-headless: run the simulation without a renderer.
//!
//! Usage:
//!   survivor-headless run --seconds 300 --seed 7 --config balance.toml --pattern square
//!   survivor-headless curve --minutes 20 --level 1

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use survivor_sim::core::commands::PlayerCommand;
use survivor_sim::core::constants::{DT, TICK_RATE};
use survivor_sim::core::enums::GamePhase;
use survivor_sim::{SimConfig, SimulationEngine};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "curve" => cmd_curve(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn print_usage() {
    eprintln!(
        "survivor-headless: run the survivor simulation without a renderer\n\
         \n\
         Commands:\n\
         \n\
         run       Simulate a run at the nominal tick rate and print a summary\n\
         \n\
           --seconds <N>      Run length in simulated seconds (default: 300)\n\
           --seed <N>         RNG seed (overrides the config file)\n\
           --config <path>    TOML config file (optional)\n\
           --pattern <name>   Movement: idle, square, circle (default: square)\n\
           --god              Enable god mode\n\
           --json             Print the final snapshot as JSON\n\
         \n\
         curve     Print the difficulty curve, one row per minute\n\
         \n\
           --minutes <N>      Last minute to print (default: 20)\n\
           --level <N>        Player level to evaluate at (default: 1)\n\
         \n\
         Logging is controlled with RUST_LOG, e.g. RUST_LOG=survivor_sim=debug.\n"
    );
}

fn parse_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_value(args, flag) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Error: {flag} expects a number, got {raw}");
            process::exit(1);
        }),
        None => default,
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Idle,
    Square,
    Circle,
}

impl Pattern {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "idle" => Some(Pattern::Idle),
            "square" => Some(Pattern::Square),
            "circle" => Some(Pattern::Circle),
            _ => None,
        }
    }

    /// Held input at `tick`.
    fn input(self, tick: u64) -> (f64, f64) {
        match self {
            Pattern::Idle => (0.0, 0.0),
            Pattern::Square => {
                let leg = (tick / (4 * TICK_RATE as u64)) % 4;
                [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)][leg as usize]
            }
            Pattern::Circle => {
                let angle = tick as f64 * DT * 0.5;
                (angle.cos(), angle.sin())
            }
        }
    }
}

fn cmd_run(args: &[String]) {
    let mut config = match parse_value(args, "--config") {
        Some(path) => match SimConfig::load(PathBuf::from(path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    config.seed = parse_number(args, "--seed", config.seed);

    let seconds: u64 = parse_number(args, "--seconds", 300);
    let pattern_name = parse_value(args, "--pattern").unwrap_or_else(|| "square".to_string());
    let Some(pattern) = Pattern::parse(&pattern_name) else {
        eprintln!("Error: unknown pattern {pattern_name}");
        process::exit(1);
    };

    let mut engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    if has_flag(args, "--god") {
        engine.toggle_god_mode();
    }

    let total_ticks = seconds * TICK_RATE as u64;
    let mut upgrades = Vec::new();
    let mut last = engine.snapshot();
    for tick in 0..total_ticks {
        let (x, y) = pattern.input(tick);
        engine.queue_command(PlayerCommand::SetMoveInput { x, y });
        if engine.phase() == GamePhase::ChoosingUpgrade {
            if let Some(id) = engine.offers().first() {
                upgrades.push(*id);
            }
            engine.queue_command(PlayerCommand::SelectUpgrade { index: 0 });
        }
        last = engine.tick(DT);
        if last.phase == GamePhase::GameOver {
            break;
        }
    }

    if has_flag(args, "--json") {
        match serde_json::to_string_pretty(&last) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to serialize snapshot: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let stats = engine.stats();
    println!("seed:            {}", engine.config().seed);
    println!("outcome:         {:?}", last.phase);
    println!("survived:        {:.1} s", last.time.elapsed_secs);
    println!("score:           {}", last.score);
    println!("kills:           {}", stats.kills);
    println!("level:           {}", last.player.level);
    println!("health:          {:.1}/{:.0}", last.player.health, last.player.max_health);
    println!("bullets fired:   {}", stats.bullets_fired);
    println!("lightning bolts: {}", stats.lightning_strikes);
    println!("experience:      {}", stats.experience_collected);
    println!(
        "specials:        {} mini-boss, {} boss",
        stats.mini_bosses_spawned, stats.bosses_spawned
    );
    println!("live enemies:    {}", last.enemies.len());
    println!("upgrades:        {upgrades:?}");
}

fn cmd_curve(args: &[String]) {
    let minutes: u64 = parse_number(args, "--minutes", 20);
    let level: u32 = parse_number(args, "--level", 1);
    let curve = SimConfig::default().curve;

    println!("min  interval_ms  elite_%  normal_hp  elite_hp  speed");
    for minute in 0..=minutes {
        let s = curve.sample(minute as f64 * 60.0, level);
        println!(
            "{minute:>3}  {:>11.0}  {:>7.0}  {:>9.0}  {:>8.0}  {:>5.1}",
            s.spawn_interval_ms, s.elite_chance_pct, s.normal_hp, s.elite_hp, s.normal_speed
        );
    }
}
