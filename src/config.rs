use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use loft_materials::{LaunchConfig, MaterialDef, MaterialsConfig};
use loft_trigger::ContactFilter;

/// Written next to the binary on first run so operators have something to edit.
pub const DEFAULT_CONFIG: &str = r#"# Demo material set and launch rules.

[materials.stone]
[materials.dirt]
[materials.slime_pad]
[materials.carpet]
passable = true

[materials.light_plate]
pressure_plate = true
passable = true

[materials.heavy_plate]
pressure_plate = true
passable = true

[launch]
horizontal_velocity = 0.2
vertical_velocity = 1.0
materials = ["slime_pad", "light_plate", "heavy_plate"]
# Empty whitelist: any solid block may become a launchpad.
whitelist = []

[launch.material_velocities.slime_pad]
horizontal_velocity = 0.5
vertical_velocity = 2.0

[contact]
min_confidence = 0.2
speed_scale = 4.0
"#;

#[derive(Deserialize)]
pub struct AppConfig {
    pub materials: HashMap<String, MaterialDef>,
    #[serde(default)]
    pub launch: LaunchConfig,
    #[serde(default)]
    pub contact: ContactFilter,
}

impl AppConfig {
    /// Loads the config file, writing the default one first if it is absent.
    pub fn load_or_init(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            log::info!("writing default config to {}", path.display());
            fs::write(path, DEFAULT_CONFIG)?;
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn materials_config(&self) -> MaterialsConfig {
        MaterialsConfig {
            materials: self
                .materials
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}
