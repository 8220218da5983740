//! Hand-off of moves to an external animation layer.
//!
//! The engine mutates true piles immediately and queues one
//! [`AnimationRequest`] per move. The animation layer drains the queue and
//! reports back through `Engine::animation_started` (the piles cards leave
//! are reconciled) and `Engine::animation_finished` (every touched pile is
//! reconciled). Display piles converge once every request has finished.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::piles::TouchedPiles;

/// Identifier of a queued animation.
pub type AnimationId = u64;

/// Direction of an animated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    Forward,
    Undo,
}

/// A move for the animation layer to play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRequest {
    pub id: AnimationId,
    pub kind: AnimationKind,
    /// Piles the cards leave.
    pub from: TouchedPiles,
    /// Piles the cards land on.
    pub to: TouchedPiles,
    pub cards: Vec<Card>,
}

/// Pending and in-flight animations.
#[derive(Clone, Debug, Default)]
pub struct AnimationQueue {
    next_id: AnimationId,
    queued: Vec<AnimationRequest>,
    in_flight: FxHashMap<AnimationId, AnimationRequest>,
}

impl AnimationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request; it stays in flight until finished.
    pub fn enqueue(
        &mut self,
        kind: AnimationKind,
        from: TouchedPiles,
        to: TouchedPiles,
        cards: Vec<Card>,
    ) -> AnimationId {
        let id = self.next_id;
        self.next_id += 1;
        let request = AnimationRequest {
            id,
            kind,
            from,
            to,
            cards,
        };
        self.queued.push(request.clone());
        self.in_flight.insert(id, request);
        id
    }

    /// Take every request not yet handed to the animation layer.
    pub fn drain(&mut self) -> Vec<AnimationRequest> {
        std::mem::take(&mut self.queued)
    }

    /// Look up an in-flight request.
    #[must_use]
    pub fn get(&self, id: AnimationId) -> Option<&AnimationRequest> {
        self.in_flight.get(&id)
    }

    /// Retire a request.
    pub fn finish(&mut self, id: AnimationId) -> Option<AnimationRequest> {
        self.queued.retain(|r| r.id != id);
        self.in_flight.remove(&id)
    }

    /// Whether an undo animation is still playing.
    #[must_use]
    pub fn undo_in_flight(&self) -> bool {
        self.in_flight.values().any(|r| r.kind == AnimationKind::Undo)
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Drop every request (new deal or restore).
    pub fn clear(&mut self) {
        self.queued.clear();
        self.in_flight.clear();
    }
}
