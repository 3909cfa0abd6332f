use std::collections::{BTreeMap, VecDeque};

use loft_geom::{Direction, Vec3};
use loft_pads::Position;
use loft_workflow::ActorId;

/// How a block stopped existing. Every cause obligates the same cleanup:
/// any launchpad registered at the affected position is unregistered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DestroyCause {
    Break,
    Burn,
    Explosion,
    PistonMove,
    LeafDecay,
    TurnedToAir,
}

pub enum Event {
    // Time housekeeping
    Tick,

    // Command surface
    CommandIssued {
        actor: ActorId,
        name: String,
        args: Vec<String>,
    },

    // World interactions
    BlockClicked {
        actor: ActorId,
        position: Position,
    },
    PlateStepped {
        actor: ActorId,
        position: Position,
    },
    ActorMoved {
        actor: ActorId,
        from: Vec3,
        to: Vec3,
        facing: Direction,
        vertical_speed: f32,
    },

    // Block-destructive world events
    BlocksDestroyed {
        positions: Vec<Position>,
        cause: DestroyCause,
    },
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        if let Some((_, q)) = self.by_tick.range_mut(self.now..=self.now).next() {
            if let Some(env) = q.pop_front() {
                return Some(env);
            }
        }
        None
    }

    pub fn advance_tick(&mut self) {
        // clean empty current bucket
        if let Some((tick, q)) = self.by_tick.range(self.now..=self.now).next() {
            if q.is_empty() {
                let key = *tick;
                self.by_tick.remove(&key);
            }
        }
        self.now = self.now.wrapping_add(1);
    }
}
