//! Position-keyed launchpad registry with durable storage.
#![forbid(unsafe_code)]

pub mod entry;
pub mod position;
pub mod registry;

pub use entry::PadEntry;
pub use position::{KeyParseError, Position, WorldId};
pub use registry::PadRegistry;
