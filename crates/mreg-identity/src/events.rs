//! # Proof-Flow Progress Events
//!
//! The provider SDK reports progress through a series of callbacks while a
//! party scans and proves. Operation contracts only ever see the terminal
//! [`VerificationOutcome`](crate::VerificationOutcome); anything before that
//! is a notification delivered through the observer here, for surfaces that
//! want to show "generating proof…" style status.

use std::sync::Arc;

use parking_lot::Mutex;

/// A progress notification from the proof flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofFlowEvent {
    /// The provider acknowledged the verification request.
    RequestReceived,
    /// The party's device is generating proofs.
    GeneratingProof,
    /// A proof finished generating.
    ProofGenerated,
    /// The provider produced a terminal result.
    Result {
        /// Whether the result was a successful verification.
        verified: bool,
    },
    /// The party rejected the request.
    Rejected,
    /// The flow failed before producing a result.
    Error {
        /// Provider-reported reason.
        message: String,
    },
}

type Sink = Box<dyn Fn(&ProofFlowEvent) + Send + Sync>;

/// Fan-out for proof-flow events.
///
/// Cloning shares the subscriber list. The lock is `parking_lot` and is
/// never held across an await point; sinks must not block.
#[derive(Clone, Default)]
pub struct ProgressObserver {
    sinks: Arc<Mutex<Vec<Sink>>>,
}

impl ProgressObserver {
    /// Create an observer with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink to receive every subsequent event.
    pub fn subscribe(&self, sink: impl Fn(&ProofFlowEvent) + Send + Sync + 'static) {
        self.sinks.lock().push(Box::new(sink));
    }

    /// Deliver an event to every subscriber.
    pub fn emit(&self, event: &ProofFlowEvent) {
        for sink in self.sinks.lock().iter() {
            sink(event);
        }
    }
}

impl std::fmt::Debug for ProgressObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressObserver")
            .field("subscribers", &self.sinks.lock().len())
            .finish()
    }
}
