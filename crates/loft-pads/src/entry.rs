use loft_geom::Direction;
use loft_materials::{LaunchRules, MaterialId};

use super::position::Position;

/// A block registered as a launchpad.
///
/// Unset velocities resolve to the material default at launch time; the
/// unset/set distinction is kept explicit rather than encoded as a sentinel.
#[derive(Clone, Debug, PartialEq)]
pub struct PadEntry {
    position: Position,
    horizontal: Option<f32>,
    vertical: Option<f32>,
    fixed_direction: Option<Direction>,
}

impl PadEntry {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            horizontal: None,
            vertical: None,
            fixed_direction: None,
        }
    }

    pub fn with_values(
        position: Position,
        horizontal: Option<f32>,
        vertical: Option<f32>,
        fixed_direction: Option<Direction>,
    ) -> Self {
        let mut entry = Self::new(position);
        entry.set_horizontal(horizontal);
        entry.set_vertical(vertical);
        entry.set_fixed_direction(fixed_direction);
        entry
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn horizontal(&self) -> Option<f32> {
        self.horizontal
    }

    pub fn vertical(&self) -> Option<f32> {
        self.vertical
    }

    /// The forced launch direction, or `None` to use the actor's facing.
    pub fn fixed_direction(&self) -> Option<Direction> {
        self.fixed_direction
    }

    /// Sets the per-pad horizontal velocity; values are floored at zero.
    /// `None` clears back to the material default.
    pub fn set_horizontal(&mut self, velocity: Option<f32>) {
        self.horizontal = velocity.map(|v| v.max(0.0));
    }

    pub fn set_vertical(&mut self, velocity: Option<f32>) {
        self.vertical = velocity.map(|v| v.max(0.0));
    }

    /// The [`Direction`] type only admits the horizontal plane, so no
    /// further validation happens here; out-of-plane names are rejected
    /// where the raw token is parsed.
    pub fn set_fixed_direction(&mut self, direction: Option<Direction>) {
        self.fixed_direction = direction;
    }

    /// Per-pad override when set, else the material default (floored at 0).
    pub fn effective_horizontal(&self, rules: &LaunchRules, material: MaterialId) -> f32 {
        self.horizontal
            .unwrap_or_else(|| rules.default_horizontal(material))
    }

    pub fn effective_vertical(&self, rules: &LaunchRules, material: MaterialId) -> f32 {
        self.vertical
            .unwrap_or_else(|| rules.default_vertical(material))
    }
}
