use loft_geom::{Direction, Vec3};
use loft_workflow::ActorId;

/// A launchable entity in the demo world.
#[derive(Debug)]
pub struct Actor {
    pub id: ActorId,
    pub pos: Vec3,
    pub vel: Vec3,
    pub facing: Direction,
}

impl Actor {
    pub fn new(id: ActorId, spawn: Vec3) -> Self {
        Self {
            id,
            pos: spawn,
            vel: Vec3::ZERO,
            facing: Direction::North,
        }
    }

    /// A launch replaces the current velocity outright.
    pub fn launch(&mut self, velocity: Vec3) {
        self.vel = velocity;
    }
}
