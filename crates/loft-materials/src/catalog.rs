use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MaterialId(pub u16);

#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    /// Whether the material is a real block that can host a pad.
    pub solid: bool,
    /// Whether an actor's feet pass through it (carpets, plates, tall grass).
    pub passable: bool,
    /// Pressure plates launch via the direct-interaction path only.
    pub pressure_plate: bool,
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    #[inline]
    pub fn is_solid(&self, id: MaterialId) -> bool {
        self.get(id).map(|m| m.solid).unwrap_or(false)
    }

    #[inline]
    pub fn is_passable(&self, id: MaterialId) -> bool {
        self.get(id).map(|m| m.passable).unwrap_or(true)
    }

    #[inline]
    pub fn is_pressure_plate(&self, id: MaterialId) -> bool {
        self.get(id).map(|m| m.pressure_plate).unwrap_or(false)
    }

    pub fn from_config(cfg: MaterialsConfig) -> Self {
        let mut catalog = MaterialCatalog::new();
        let mut entries: Vec<(String, MaterialDef)> = cfg.materials.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so MaterialId assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, def) in entries {
            let solid = def.solid.unwrap_or(true);
            let id = MaterialId(catalog.materials.len() as u16);
            catalog.by_key.insert(key.clone(), id);
            catalog.materials.push(Material {
                id,
                key,
                solid,
                passable: def.passable.unwrap_or(!solid),
                pressure_plate: def.pressure_plate.unwrap_or(false),
            });
        }
        catalog
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        Ok(Self::from_config(cfg))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialDef>,
}

#[derive(Deserialize, Default, Clone)]
pub struct MaterialDef {
    pub solid: Option<bool>,
    pub passable: Option<bool>,
    pub pressure_plate: Option<bool>,
}
