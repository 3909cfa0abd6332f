use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::catalog::{MaterialCatalog, MaterialId};

/// Compiled launch rules: which materials launch on contact, which may become
/// newly-registered pads, and the default velocities per material.
#[derive(Default, Clone, Debug)]
pub struct LaunchRules {
    horizontal_velocity: f32,
    vertical_velocity: f32,
    launch_materials: HashSet<MaterialId>,
    whitelist: HashSet<MaterialId>,
    velocities: HashMap<MaterialId, CompiledVelocities>,
}

#[derive(Clone, Copy, Debug, Default)]
struct CompiledVelocities {
    horizontal: Option<f32>,
    vertical: Option<f32>,
}

impl LaunchRules {
    pub fn compile(catalog: &MaterialCatalog, cfg: &LaunchConfig) -> Self {
        let launch_materials = resolve_materials(catalog, &cfg.materials, "launch materials");
        let whitelist = resolve_materials(catalog, &cfg.whitelist, "whitelist");
        let mut velocities = HashMap::new();
        for (key, v) in &cfg.material_velocities {
            match catalog.get_id(key) {
                Some(id) => {
                    velocities.insert(
                        id,
                        CompiledVelocities {
                            horizontal: v.horizontal_velocity,
                            vertical: v.vertical_velocity,
                        },
                    );
                }
                None => {
                    log::warn!("material velocity override for unknown material `{key}` ignored")
                }
            }
        }
        Self {
            horizontal_velocity: cfg.horizontal_velocity.unwrap_or(0.0),
            vertical_velocity: cfg.vertical_velocity.unwrap_or(0.0),
            launch_materials,
            whitelist,
            velocities,
        }
    }

    /// Default horizontal velocity for a material: the per-material override
    /// when set and non-negative, else the global default floored at zero.
    pub fn default_horizontal(&self, material: MaterialId) -> f32 {
        match self.velocities.get(&material).and_then(|v| v.horizontal) {
            Some(v) if v >= 0.0 => v,
            _ => self.horizontal_velocity.max(0.0),
        }
    }

    pub fn default_vertical(&self, material: MaterialId) -> f32 {
        match self.velocities.get(&material).and_then(|v| v.vertical) {
            Some(v) if v >= 0.0 => v,
            _ => self.vertical_velocity.max(0.0),
        }
    }

    /// An empty whitelist admits every material.
    pub fn is_whitelisted(&self, material: MaterialId) -> bool {
        self.whitelist.is_empty() || self.whitelist.contains(&material)
    }

    /// Whether a bare, unregistered block of this material launches on contact.
    pub fn is_launch_material(&self, material: MaterialId) -> bool {
        self.launch_materials.contains(&material)
    }
}

fn resolve_materials(
    catalog: &MaterialCatalog,
    keys: &[String],
    what: &str,
) -> HashSet<MaterialId> {
    let mut out = HashSet::new();
    for key in keys {
        match catalog.get_id(key) {
            // Non-block materials can never host a pad; simply ignore them.
            Some(id) if catalog.is_solid(id) => {
                out.insert(id);
            }
            Some(_) => log::warn!("non-solid material `{key}` removed from {what}"),
            None => log::warn!("unknown material `{key}` removed from {what}"),
        }
    }
    out
}

// --- Config ---

#[derive(Deserialize, Default)]
pub struct LaunchConfig {
    pub horizontal_velocity: Option<f32>,
    pub vertical_velocity: Option<f32>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub material_velocities: HashMap<String, MaterialVelocities>,
}

#[derive(Deserialize, Default)]
pub struct MaterialVelocities {
    pub horizontal_velocity: Option<f32>,
    pub vertical_velocity: Option<f32>,
}
