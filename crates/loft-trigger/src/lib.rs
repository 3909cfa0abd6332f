//! Launch-trigger decision engine: turns contact signals into launch vectors.
#![forbid(unsafe_code)]

use loft_geom::{Direction, Vec3};
use loft_materials::{LaunchRules, MaterialCatalog, MaterialId};
use loft_pads::{PadRegistry, Position, WorldId};
use serde::Deserialize;

/// A decided launch. The velocity replaces the actor's current velocity
/// wholesale; it is a hard override, not an impulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub velocity: Vec3,
}

/// One movement observation: where the actor's feet were and are, which way
/// they face, and their current vertical speed.
#[derive(Clone, Debug)]
pub struct MovementSample {
    pub world: WorldId,
    pub from: Vec3,
    pub to: Vec3,
    pub facing: Direction,
    pub vertical_speed: f32,
}

/// Gate for the continuous-movement path, standing in for host-specific
/// landing heuristics. Confidence is 1 at rest and falls off with vertical
/// speed; a sample below the configured minimum does not launch.
#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct ContactFilter {
    pub min_confidence: f32,
    pub speed_scale: f32,
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self {
            min_confidence: 0.2,
            speed_scale: 4.0,
        }
    }
}

impl ContactFilter {
    pub fn confidence(&self, vertical_speed: f32) -> f32 {
        let r = vertical_speed / self.speed_scale.max(f32::EPSILON);
        1.0 / (1.0 + r * r)
    }

    pub fn passes(&self, vertical_speed: f32) -> bool {
        self.confidence(vertical_speed) >= self.min_confidence
    }
}

/// Decides whether contact with `position` launches an actor.
///
/// A registered pad launches with its resolved properties regardless of
/// material; otherwise an eligible, non-excluded launch material uses the
/// material defaults and the actor's facing.
pub fn decide(
    registry: &PadRegistry,
    rules: &LaunchRules,
    position: &Position,
    material: MaterialId,
    facing: Direction,
) -> Option<Launch> {
    if let Some(entry) = registry.get(position) {
        let direction = entry.fixed_direction().unwrap_or(facing);
        return Some(launch_vector(
            direction,
            entry.effective_horizontal(rules, material),
            entry.effective_vertical(rules, material),
        ));
    }
    if rules.is_launch_material(material) && rules.is_whitelisted(material) {
        return Some(launch_vector(
            facing,
            rules.default_horizontal(material),
            rules.default_vertical(material),
        ));
    }
    None
}

/// Direct pressure-plate-style interaction path.
pub fn plate_contact(
    registry: &PadRegistry,
    rules: &LaunchRules,
    position: &Position,
    material: MaterialId,
    facing: Direction,
) -> Option<Launch> {
    decide(registry, rules, position, material, facing)
}

/// Continuous-movement path.
///
/// `material_at` samples the world; `None` means air/empty. Resolves the
/// footing block (the block below when the destination block is air),
/// ignores samples where the actor has not moved, skips pressure plates
/// (those trigger via [`plate_contact`]), and gates on the contact filter.
pub fn movement_contact(
    registry: &PadRegistry,
    rules: &LaunchRules,
    catalog: &MaterialCatalog,
    material_at: impl Fn(&Position) -> Option<MaterialId>,
    movement: &MovementSample,
    filter: &ContactFilter,
) -> Option<Launch> {
    if movement.from == movement.to {
        return None;
    }

    let mut position = block_position(&movement.world, movement.to);
    let material = match material_at(&position) {
        Some(material) => material,
        None => {
            // Standing on a full block: the feet coordinate rounds into the
            // air block above it, so probe just below the feet instead.
            position = block_position(&movement.world, movement.to - Vec3::new(0.0, 0.2, 0.0));
            match material_at(&position) {
                Some(material) if !catalog.is_passable(material) => material,
                _ => return None,
            }
        }
    };

    if catalog.is_pressure_plate(material) {
        return None;
    }
    if !filter.passes(movement.vertical_speed) {
        return None;
    }
    decide(registry, rules, &position, material, movement.facing)
}

fn launch_vector(direction: Direction, horizontal: f32, vertical: f32) -> Launch {
    Launch {
        velocity: direction.unit_vector() * horizontal + Vec3::UP * vertical,
    }
}

fn block_position(world: &WorldId, at: Vec3) -> Position {
    Position::new(
        world.clone(),
        at.x.floor() as i32,
        at.y.floor() as i32,
        at.z.floor() as i32,
    )
}
