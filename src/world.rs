use hashbrown::HashMap;

use loft_materials::MaterialId;
use loft_pads::Position;

/// Stand-in for the host world: a sparse map of placed blocks.
/// Absent positions are air.
#[derive(Default)]
pub struct WorldGrid {
    blocks: HashMap<Position, MaterialId>,
}

impl WorldGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material_at(&self, position: &Position) -> Option<MaterialId> {
        self.blocks.get(position).copied()
    }

    pub fn set(&mut self, position: Position, material: MaterialId) {
        self.blocks.insert(position, material);
    }

    pub fn clear(&mut self, position: &Position) {
        self.blocks.remove(position);
    }
}
