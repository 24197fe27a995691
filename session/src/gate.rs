use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::AdmissionPolicy;

/// Proof that a cycle was let in, the slot is released when it is dropped.
#[derive(Debug)]
pub struct Admission {
    _permit: Option<OwnedSemaphorePermit>,
}

/// A single-slot gate limiting how many cycles run at the same time.
#[derive(Debug)]
pub struct AdmissionGate {
    policy: AdmissionPolicy,
    slot: Arc<Semaphore>,
}

impl AdmissionGate {
    /// Creates a new `AdmissionGate` with a single free slot.
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self {
            policy,
            slot: Arc::new(Semaphore::new(1)),
        }
    }

    /// Asks for permission to run a cycle.
    ///
    /// # Returns
    /// `None` if the policy is `Reject` and another cycle holds the slot. Under `Queue` this
    /// waits for the slot, under `Unguarded` it always admits.
    pub async fn admit(&self) -> Option<Admission> {
        match self.policy {
            AdmissionPolicy::Unguarded => Some(Admission { _permit: None }),
            AdmissionPolicy::Reject => Arc::clone(&self.slot)
                .try_acquire_owned()
                .ok()
                .map(|permit| Admission {
                    _permit: Some(permit),
                }),
            AdmissionPolicy::Queue => Arc::clone(&self.slot)
                .acquire_owned()
                .await
                .ok()
                .map(|permit| Admission {
                    _permit: Some(permit),
                }),
        }
    }

    /// Whether a guarded cycle currently holds the slot.
    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }
}
