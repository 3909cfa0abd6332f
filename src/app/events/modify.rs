use super::App;
use loft_pads::Position;
use loft_workflow::{ActorId, FailureReason, Outcome, apply_pending};

impl App {
    pub(super) fn handle_block_clicked(&mut self, actor: ActorId, position: Position) {
        let Some(material) = self.world.material_at(&position) else {
            return;
        };
        let outcome = apply_pending(
            &mut self.store,
            &mut self.registry,
            &self.rules,
            actor,
            &position,
            material,
        );
        match outcome {
            // The actor had nothing pending; the click means something else.
            Outcome::NotConsumed => {}
            Outcome::Success => println!("Launchpad at {position} modified."),
            Outcome::PartialFailure(FailureReason::NotWhitelisted) => {
                println!("That block cannot become a launchpad. Click a valid block.");
            }
        }
    }
}
