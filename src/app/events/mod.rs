mod breaking;
mod commands;
mod launch;
mod modify;

use super::App;
use crate::event::{Event, EventEnvelope};

impl App {
    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        // Log a concise line for the processed event
        Self::log_event(env.tick, &env.kind);
        match env.kind {
            Event::Tick => {}
            Event::CommandIssued { actor, name, args } => {
                self.handle_command_issued(actor, &name, &args);
            }
            Event::BlockClicked { actor, position } => {
                self.handle_block_clicked(actor, position);
            }
            Event::PlateStepped { actor, position } => {
                self.handle_plate_stepped(actor, position);
            }
            Event::ActorMoved {
                actor,
                from,
                to,
                facing,
                vertical_speed,
            } => {
                self.handle_actor_moved(actor, from, to, facing, vertical_speed);
            }
            Event::BlocksDestroyed { positions, cause } => {
                self.handle_blocks_destroyed(&positions, cause);
            }
        }
    }
}
