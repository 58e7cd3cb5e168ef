//! The bot core — one entry point, one outcome.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::delivery::Deliverer;
use crate::persona::Synthesizer;

/// Result of handling one inbound message. The webhook layer maps this
/// to a transport status; the core never raises past this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
}

/// Stateless persona bot: synthesize a reply, deliver it once.
pub struct Bot {
    synthesizer: Synthesizer,
    deliverer: Deliverer,
}

impl Bot {
    pub fn new(synthesizer: Synthesizer, deliverer: Deliverer) -> Self {
        Self {
            synthesizer,
            deliverer,
        }
    }

    /// Handle one inbound message end to end.
    ///
    /// Each message gets its own RNG instance, so concurrent workers
    /// never contend on a shared generator.
    pub async fn handle_incoming(&self, chat_id: i64, text: &str) -> DeliveryOutcome {
        let mut rng = StdRng::from_entropy();
        let reply = self.synthesizer.respond(text, &mut rng);
        info!(chat_id, reply = %reply, "Synthesized reply");

        if self.deliverer.deliver(chat_id, &reply).await {
            DeliveryOutcome::Delivered
        } else {
            DeliveryOutcome::Failed
        }
    }
}
