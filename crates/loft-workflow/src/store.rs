use std::collections::HashMap;

use super::command::ModificationRequest;

/// Identifier of the actor (player) issuing modification commands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActorId(pub u64);

/// Pending, not-yet-applied modification requests, one set per actor.
///
/// Owned by exactly one component instance; controllers borrow it per call.
#[derive(Default)]
pub struct RequestStore {
    pending: HashMap<ActorId, Vec<ModificationRequest>>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a request into the actor's pending set, creating the set on
    /// first use. Semantically-equal duplicates collapse.
    pub fn add_request(&mut self, actor: ActorId, request: ModificationRequest) {
        let requests = self.pending.entry(actor).or_default();
        if !requests.contains(&request) {
            requests.push(request);
        }
    }

    /// Removes and returns the actor's whole pending set; empty if none.
    /// Destructive and single-use: a second drain yields nothing.
    pub fn drain_requests(&mut self, actor: ActorId) -> Vec<ModificationRequest> {
        self.pending.remove(&actor).unwrap_or_default()
    }

    pub fn has_pending(&self, actor: ActorId) -> bool {
        self.pending.get(&actor).is_some_and(|r| !r.is_empty())
    }
}
