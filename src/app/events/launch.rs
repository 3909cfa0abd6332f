use super::App;
use loft_geom::{Direction, Vec3};
use loft_pads::Position;
use loft_trigger::{MovementSample, movement_contact, plate_contact};
use loft_workflow::ActorId;

impl App {
    pub(super) fn handle_plate_stepped(&mut self, actor: ActorId, position: Position) {
        let Some(material) = self.world.material_at(&position) else {
            return;
        };
        let Some(facing) = self.actors.get(&actor).map(|a| a.facing) else {
            return;
        };
        let launch = plate_contact(&self.registry, &self.rules, &position, material, facing);
        if let Some(launch) = launch {
            self.apply_launch(actor, launch.velocity);
        }
    }

    pub(super) fn handle_actor_moved(
        &mut self,
        actor: ActorId,
        from: Vec3,
        to: Vec3,
        facing: Direction,
        vertical_speed: f32,
    ) {
        if let Some(a) = self.actors.get_mut(&actor) {
            a.pos = to;
            a.facing = facing;
        }
        let sample = MovementSample {
            world: self.world_id.clone(),
            from,
            to,
            facing,
            vertical_speed,
        };
        let launch = movement_contact(
            &self.registry,
            &self.rules,
            &self.catalog,
            |p| self.world.material_at(p),
            &sample,
            &self.filter,
        );
        if let Some(launch) = launch {
            self.apply_launch(actor, launch.velocity);
        }
    }

    fn apply_launch(&mut self, actor: ActorId, velocity: Vec3) {
        if let Some(a) = self.actors.get_mut(&actor) {
            a.launch(velocity);
            log::info!(
                "launched actor {} with velocity ({:.2}, {:.2}, {:.2})",
                actor.0,
                velocity.x,
                velocity.y,
                velocity.z
            );
            println!(
                "Whoosh! Actor {} launched with velocity ({:.2}, {:.2}, {:.2}).",
                actor.0, velocity.x, velocity.y, velocity.z
            );
        }
    }
}
