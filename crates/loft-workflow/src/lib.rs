//! Two-phase launchpad modification workflow: an actor queues property
//! changes by command, then applies them to whichever block they click next.
#![forbid(unsafe_code)]

pub mod command;
pub mod controller;
pub mod store;

pub use command::{CommandError, ModificationAction, ModificationRequest, ParsedCommand};
pub use controller::{FailureReason, Outcome, abort_pending, apply_pending};
pub use store::{ActorId, RequestStore};
