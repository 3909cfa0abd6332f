use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use loft_geom::Direction;
use serde::{Deserialize, Serialize};

use super::entry::PadEntry;
use super::position::Position;

/// Source of truth for which positions are launchpads.
///
/// Owns every [`PadEntry`]; collaborators read through [`get`](Self::get) and
/// mutate by re-registering, so the durable copy never drifts ahead of memory.
pub struct PadRegistry {
    path: PathBuf,
    pads: HashMap<Position, PadEntry>,
}

impl PadRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pads: HashMap::new(),
        }
    }

    /// Populates the in-memory map from the data file.
    ///
    /// Records whose footing block is no longer solid are silently dropped as
    /// stale; a malformed record is logged and skipped without aborting the
    /// rest of the load. A missing file is an empty registry, not an error.
    pub fn load(&mut self, is_solid: impl Fn(&Position) -> bool) -> Result<(), Box<dyn Error>> {
        if !self.path.exists() {
            self.pads = HashMap::new();
            return Ok(());
        }
        let raw = fs::read_to_string(&self.path)?;
        self.pads = decode_pads(&raw, is_solid)?;
        Ok(())
    }

    pub fn get(&self, position: &Position) -> Option<&PadEntry> {
        self.pads.get(position)
    }

    /// Inserts or overwrites the entry for its position, then persists.
    pub fn register(&mut self, entry: PadEntry) {
        self.pads.insert(entry.position().clone(), entry);
        self.save_all();
    }

    /// Removes the entry if present, then persists; absent is a no-op.
    pub fn unregister(&mut self, position: &Position) {
        if self.pads.remove(position).is_some() {
            self.save_all();
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &PadEntry> {
        self.pads.values()
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// Full durable rewrite. A failed write is logged and the in-memory map
    /// stays authoritative until a later write succeeds.
    pub fn save_all(&self) {
        match encode_pads(&self.pads) {
            Ok(encoded) => {
                if let Err(e) = fs::write(&self.path, encoded) {
                    log::error!(
                        "unable to save launchpads to {}: {e}",
                        self.path.display()
                    );
                }
            }
            Err(e) => log::error!("unable to encode launchpads: {e}"),
        }
    }
}

/// Decodes the pad data file. Per-record failures are logged and skipped.
pub fn decode_pads(
    toml_str: &str,
    is_solid: impl Fn(&Position) -> bool,
) -> Result<HashMap<Position, PadEntry>, Box<dyn Error>> {
    let file: PadsFile = toml::from_str(toml_str)?;
    let mut pads = HashMap::new();
    for (key, record) in file.pads {
        let position = match Position::parse_key(&key) {
            Ok(position) => position,
            Err(e) => {
                log::error!("unable to load launchpad `{key}`: {e}");
                continue;
            }
        };
        // The pad's block has been removed since the last save; forget it.
        if !is_solid(&position) {
            continue;
        }
        let fixed_direction = match record.fixed_direction.as_deref() {
            Some(name) => match Direction::from_name(name) {
                Ok(direction) => Some(direction),
                Err(e) => {
                    log::error!("unable to load launchpad `{key}`: {e}");
                    continue;
                }
            },
            None => None,
        };
        let entry = PadEntry::with_values(
            position.clone(),
            unsentinel(record.horizontal_velocity),
            unsentinel(record.vertical_velocity),
            fixed_direction,
        );
        pads.insert(position, entry);
    }
    Ok(pads)
}

pub fn encode_pads(pads: &HashMap<Position, PadEntry>) -> Result<String, Box<dyn Error>> {
    let mut file = PadsFile {
        pads: BTreeMap::new(),
    };
    for entry in pads.values() {
        file.pads.insert(
            entry.position().storage_key(),
            PadRecord {
                horizontal_velocity: entry.horizontal().unwrap_or(-1.0),
                vertical_velocity: entry.vertical().unwrap_or(-1.0),
                fixed_direction: entry.fixed_direction().map(|d| d.name().to_string()),
            },
        );
    }
    Ok(toml::to_string(&file)?)
}

#[inline]
fn unsentinel(v: f32) -> Option<f32> {
    (v >= 0.0).then_some(v)
}

// --- Stored layout: one record per pad, keyed `world,x,y,z` ---

#[derive(Serialize, Deserialize, Default)]
struct PadsFile {
    #[serde(default)]
    pads: BTreeMap<String, PadRecord>,
}

#[derive(Serialize, Deserialize)]
struct PadRecord {
    /// `-1` keeps the historical "unset" sentinel in the stored form only.
    #[serde(default = "sentinel")]
    horizontal_velocity: f32,
    #[serde(default = "sentinel")]
    vertical_velocity: f32,
    fixed_direction: Option<String>,
}

fn sentinel() -> f32 {
    -1.0
}
