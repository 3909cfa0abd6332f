use loft_materials::{LaunchRules, MaterialId};
use loft_pads::{PadEntry, PadRegistry, Position};

use super::command::ModificationRequest;
use super::store::{ActorId, RequestStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The actor had nothing pending; the interaction is not consumed.
    NotConsumed,
    /// Every request in the batch was applied.
    Success,
    /// Nothing was applied; the batch was re-queued for the actor.
    PartialFailure(FailureReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The clicked block is not an existing pad and its material is not
    /// whitelisted for new pads.
    NotWhitelisted,
}

/// Applies the actor's pending requests to the block they clicked.
///
/// The drained batch is applied to one in-memory entry and the registry is
/// written at most once: on registration of a new pad, or when an existing
/// pad actually changed. `Remove` wins over the rest of its batch.
pub fn apply_pending(
    store: &mut RequestStore,
    registry: &mut PadRegistry,
    rules: &LaunchRules,
    actor: ActorId,
    position: &Position,
    material: MaterialId,
) -> Outcome {
    let requests = store.drain_requests(actor);
    if requests.is_empty() {
        return Outcome::NotConsumed;
    }

    let existing = registry.get(position).cloned();
    let is_pad = existing.is_some();

    // New pads may only be created on whitelisted materials. The whole batch
    // stays pending so the actor can retry on a valid block.
    if !is_pad && !rules.is_whitelisted(material) {
        for request in requests {
            store.add_request(actor, request);
        }
        return Outcome::PartialFailure(FailureReason::NotWhitelisted);
    }

    let mut entry = existing
        .clone()
        .unwrap_or_else(|| PadEntry::new(position.clone()));
    let mut removed = false;
    for request in &requests {
        match request {
            ModificationRequest::Remove => {
                if is_pad {
                    registry.unregister(position);
                }
                // Remove wins; any further requests in the batch are moot.
                removed = true;
                break;
            }
            // Registration itself happens after the batch; an explicit Add
            // carries no property change.
            ModificationRequest::Add => {}
            ModificationRequest::SetHorizontal(v) => entry.set_horizontal(*v),
            ModificationRequest::SetVertical(v) => entry.set_vertical(*v),
            ModificationRequest::SetFixedDirection(d) => entry.set_fixed_direction(*d),
        }
    }

    if !removed {
        if !is_pad {
            registry.register(entry);
        } else if existing.as_ref() != Some(&entry) {
            registry.register(entry);
        }
    }
    Outcome::Success
}

/// Discards the actor's pending set without touching any block.
/// Returns how many requests were dropped.
pub fn abort_pending(store: &mut RequestStore, actor: ActorId) -> usize {
    store.drain_requests(actor).len()
}
