mod events;

use std::path::PathBuf;

use hashbrown::HashMap;

use loft_geom::{Direction, Vec3};
use loft_materials::{LaunchRules, MaterialCatalog};
use loft_pads::{PadRegistry, Position, WorldId};
use loft_trigger::ContactFilter;
use loft_workflow::{ActorId, RequestStore};

use crate::actor::Actor;
use crate::config::AppConfig;
use crate::event::{Event, EventQueue};
use crate::world::WorldGrid;

pub struct App {
    pub catalog: MaterialCatalog,
    pub rules: LaunchRules,
    pub filter: ContactFilter,
    pub registry: PadRegistry,
    pub store: RequestStore,
    pub world: WorldGrid,
    pub world_id: WorldId,
    pub actors: HashMap<ActorId, Actor>,
    pub queue: EventQueue,
    config_path: PathBuf,
}

impl App {
    pub fn new(cfg: AppConfig, config_path: PathBuf, data_path: PathBuf, world_id: WorldId) -> Self {
        let catalog = MaterialCatalog::from_config(cfg.materials_config());
        let rules = LaunchRules::compile(&catalog, &cfg.launch);
        Self {
            catalog,
            rules,
            filter: cfg.contact,
            registry: PadRegistry::new(data_path),
            store: RequestStore::new(),
            world: WorldGrid::new(),
            world_id,
            actors: HashMap::new(),
            queue: EventQueue::new(),
            config_path,
        }
    }

    /// (Re)loads persisted pads, dropping records whose block is gone.
    /// Call after the world has its blocks so solidity checks see them.
    pub fn load_pads(&mut self) {
        let world = &self.world;
        let catalog = &self.catalog;
        if let Err(e) = self.registry.load(|position| {
            world
                .material_at(position)
                .is_some_and(|m| catalog.is_solid(m))
        }) {
            log::error!("unable to load launchpads: {e}");
        }
        log::info!("loaded {} launchpad(s)", self.registry.len());
    }

    /// Re-reads the config file and rebuilds rules, then re-loads pads.
    pub fn reload(&mut self) {
        match AppConfig::load_or_init(&self.config_path) {
            Ok(cfg) => {
                self.catalog = MaterialCatalog::from_config(cfg.materials_config());
                self.rules = LaunchRules::compile(&self.catalog, &cfg.launch);
                self.filter = cfg.contact;
                self.load_pads();
                println!("Configuration reloaded.");
            }
            Err(e) => {
                // Keep running on the previous configuration.
                log::error!("unable to reload config: {e}");
                println!("Reload failed; keeping the current configuration.");
            }
        }
    }

    pub fn spawn_actor(&mut self, id: ActorId, spawn: Vec3) {
        self.actors.insert(id, Actor::new(id, spawn));
    }

    pub fn actor_pos(&self, id: ActorId) -> Option<Vec3> {
        self.actors.get(&id).map(|a| a.pos)
    }

    pub fn face(&mut self, id: ActorId, direction: Direction) {
        if let Some(actor) = self.actors.get_mut(&id) {
            actor.facing = direction;
        }
    }

    pub fn set_block(&mut self, position: Position, material_key: &str) -> bool {
        match self.catalog.get_id(material_key) {
            Some(material) => {
                self.world.set(position, material);
                true
            }
            None => {
                log::warn!("unknown material `{material_key}`");
                false
            }
        }
    }

    pub fn list_pads(&self) {
        if self.registry.is_empty() {
            println!("No launchpads registered.");
            return;
        }
        for entry in self.registry.all() {
            let fmt = |v: Option<f32>| match v {
                Some(v) => format!("{v}"),
                None => "default".to_string(),
            };
            println!(
                "{} horizontal={} vertical={} direction={}",
                entry.position(),
                fmt(entry.horizontal()),
                fmt(entry.vertical()),
                entry
                    .fixed_direction()
                    .map(|d| d.name())
                    .unwrap_or("facing"),
            );
        }
    }

    /// Drains every ready event, then advances the tick.
    pub fn pump(&mut self) {
        self.queue.emit_now(Event::Tick);
        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(env);
        }
        self.queue.advance_tick();
    }

    fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            E::CommandIssued { actor, name, args } => {
                log::info!(target: "events", "[tick {}] CommandIssued actor={} name={} args={:?}",
                    tick, actor.0, name, args);
            }
            E::BlockClicked { actor, position } => {
                log::info!(target: "events", "[tick {}] BlockClicked actor={} pos={}", tick, actor.0, position);
            }
            E::PlateStepped { actor, position } => {
                log::info!(target: "events", "[tick {}] PlateStepped actor={} pos={}", tick, actor.0, position);
            }
            E::ActorMoved {
                actor,
                to,
                vertical_speed,
                ..
            } => {
                log::trace!(target: "events", "[tick {}] ActorMoved actor={} to=({:.2},{:.2},{:.2}) vy={:.2}",
                    tick, actor.0, to.x, to.y, to.z, vertical_speed);
            }
            E::BlocksDestroyed { positions, cause } => {
                log::info!(target: "events", "[tick {}] BlocksDestroyed n={} cause={:?}", tick, positions.len(), cause);
            }
        }
    }
}
