use super::App;
use crate::event::DestroyCause;
use loft_pads::Position;

impl App {
    /// Any block-destructive event unregisters the pads it touched. The cause
    /// only matters for logging; the cleanup is identical.
    pub(super) fn handle_blocks_destroyed(&mut self, positions: &[Position], cause: DestroyCause) {
        for position in positions {
            self.world.clear(position);
            if self.registry.get(position).is_some() {
                log::info!("launchpad at {position} destroyed ({cause:?})");
            }
            self.registry.unregister(position);
        }
    }
}
