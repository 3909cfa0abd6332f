mod actor;
mod app;
mod config;
mod event;
mod world;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use loft_geom::{Direction, Vec3};
use loft_pads::{Position, WorldId};
use loft_workflow::ActorId;

use crate::app::App;
use crate::config::AppConfig;
use crate::event::{DestroyCause, Event};

/// Launchpad registry, modification workflow, and launch-trigger engine,
/// driven by a small interactive demo world.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the config file (created with defaults if absent)
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Path to the pad data file
    #[arg(long, default_value = "pads.toml")]
    data: PathBuf,

    /// Name of the demo world
    #[arg(long, default_value = "overworld")]
    world: String,
}

const ACTOR: ActorId = ActorId(1);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match AppConfig::load_or_init(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("unable to load config {}: {e}", args.config.display());
            std::process::exit(1);
        }
    };

    let world_id = WorldId::new(args.world.clone());
    let mut app = App::new(cfg, args.config, args.data, world_id.clone());

    // A small stone platform so persisted pads have solid footing.
    for x in -8..=8 {
        for z in -8..=8 {
            app.set_block(Position::new(world_id.clone(), x, 63, z), "stone");
        }
    }
    app.load_pads();
    app.spawn_actor(ACTOR, Vec3::new(0.5, 64.0, 0.5));

    println!("loft demo world `{world_id}`. Type `help` for commands.");
    run_repl(&mut app, world_id);
}

fn run_repl(app: &mut App, world_id: WorldId) {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, rest)) = tokens.split_first() else {
            continue;
        };
        match cmd {
            "pad" => {
                let Some((&name, args)) = rest.split_first() else {
                    println!("usage: pad <action> [args...]");
                    continue;
                };
                app.queue.emit_now(Event::CommandIssued {
                    actor: ACTOR,
                    name: name.to_string(),
                    args: args.iter().map(|s| s.to_string()).collect(),
                });
            }
            "click" => match parse_block(rest, &world_id) {
                Some(position) => {
                    app.queue.emit_now(Event::BlockClicked {
                        actor: ACTOR,
                        position,
                    });
                }
                None => println!("usage: click <x> <y> <z>"),
            },
            "plate" => match parse_block(rest, &world_id) {
                Some(position) => {
                    app.queue.emit_now(Event::PlateStepped {
                        actor: ACTOR,
                        position,
                    });
                }
                None => println!("usage: plate <x> <y> <z>"),
            },
            "step" => match parse_step(rest) {
                Some((to, vertical_speed)) => {
                    let from = app.actor_pos(ACTOR).unwrap_or(Vec3::ZERO);
                    let facing = app
                        .actors
                        .get(&ACTOR)
                        .map(|a| a.facing)
                        .unwrap_or(Direction::North);
                    app.queue.emit_now(Event::ActorMoved {
                        actor: ACTOR,
                        from,
                        to,
                        facing,
                        vertical_speed,
                    });
                }
                None => println!("usage: step <x> <y> <z> [vertical-speed]"),
            },
            "face" => match rest.first().map(|s| Direction::from_name(s)) {
                Some(Ok(direction)) => app.face(ACTOR, direction),
                Some(Err(e)) => println!("{e}"),
                None => println!("usage: face <direction>"),
            },
            "place" => match (parse_block(&rest[..rest.len().min(3)], &world_id), rest.get(3)) {
                (Some(position), Some(material)) => {
                    if !app.set_block(position, material) {
                        println!("unknown material `{material}`");
                    }
                }
                _ => println!("usage: place <x> <y> <z> <material>"),
            },
            "break" | "burn" | "decay" | "sand" => match parse_block(rest, &world_id) {
                Some(position) => {
                    app.queue.emit_now(Event::BlocksDestroyed {
                        positions: vec![position],
                        cause: destroy_cause(cmd),
                    });
                }
                None => println!("usage: {cmd} <x> <y> <z>"),
            },
            "explode" | "piston" => match parse_blocks(rest, &world_id) {
                Some(positions) if !positions.is_empty() => {
                    app.queue.emit_now(Event::BlocksDestroyed {
                        positions,
                        cause: destroy_cause(cmd),
                    });
                }
                _ => println!("usage: {cmd} <x> <y> <z> [<x> <y> <z> ...]"),
            },
            "pads" => app.list_pads(),
            "actor" => {
                if let Some(actor) = app.actors.get(&ACTOR) {
                    println!(
                        "actor {} at ({:.2}, {:.2}, {:.2}) facing {} velocity ({:.2}, {:.2}, {:.2})",
                        actor.id.0,
                        actor.pos.x,
                        actor.pos.y,
                        actor.pos.z,
                        actor.facing.name(),
                        actor.vel.x,
                        actor.vel.y,
                        actor.vel.z,
                    );
                }
            }
            "reload" => app.reload(),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; type `help`"),
        }
        app.pump();
    }
}

fn destroy_cause(cmd: &str) -> DestroyCause {
    match cmd {
        "burn" => DestroyCause::Burn,
        "decay" => DestroyCause::LeafDecay,
        "sand" => DestroyCause::TurnedToAir,
        "explode" => DestroyCause::Explosion,
        "piston" => DestroyCause::PistonMove,
        _ => DestroyCause::Break,
    }
}

fn parse_block(tokens: &[&str], world_id: &WorldId) -> Option<Position> {
    let [x, y, z] = tokens else {
        return None;
    };
    Some(Position::new(
        world_id.clone(),
        x.parse().ok()?,
        y.parse().ok()?,
        z.parse().ok()?,
    ))
}

fn parse_blocks(tokens: &[&str], world_id: &WorldId) -> Option<Vec<Position>> {
    if tokens.is_empty() || tokens.len() % 3 != 0 {
        return None;
    }
    tokens
        .chunks(3)
        .map(|chunk| parse_block(chunk, world_id))
        .collect()
}

fn parse_step(tokens: &[&str]) -> Option<(Vec3, f32)> {
    if tokens.len() < 3 || tokens.len() > 4 {
        return None;
    }
    let to = Vec3::new(
        tokens[0].parse().ok()?,
        tokens[1].parse().ok()?,
        tokens[2].parse().ok()?,
    );
    let vertical_speed = match tokens.get(3) {
        Some(s) => s.parse().ok()?,
        None => 0.0,
    };
    Some((to, vertical_speed))
}

fn print_help() {
    println!(
        "\
pad <action> [args]   queue a launchpad modification (add, remove,
                      horizontalVelocity, verticalVelocity, fixedDirection,
                      velocities, abort); `default` clears a property
click <x> <y> <z>     right-click a block, applying pending modifications
plate <x> <y> <z>     step on a pressure plate
step <x> <y> <z> [vy] move the actor, sampling launch contact
face <direction>      change the actor's facing
place <x> <y> <z> <m> place a block of material <m>
break <x> <y> <z>     break a block (also: burn, decay, sand)
explode <x> <y> <z>.. destroy several blocks at once (also: piston)
pads                  list registered launchpads
actor                 show the demo actor
reload                re-read the config file
quit                  leave"
    );
}
