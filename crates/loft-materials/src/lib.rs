//! Material catalog and launch rules (default velocities, whitelists).
#![forbid(unsafe_code)]

pub mod catalog;
pub mod rules;

pub use catalog::{Material, MaterialCatalog, MaterialDef, MaterialId, MaterialsConfig};
pub use rules::{LaunchConfig, LaunchRules, MaterialVelocities};
