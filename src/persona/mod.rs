//! Response synthesis — classify, pick a phrase, stylize.
//!
//! All inbound text flows through:
//! 1. command check (`/start`, `/help`)
//! 2. `IntentClassifier::classify` — keyword/regex rules, first match wins
//! 3. `PhraseBook::pick` — uniform draw from the category's pool
//! 4. `StyleTransformer::stylize` — the probabilistic mutation stack
//!
//! Everything here is CPU-bound and total: no I/O, no shared mutable
//! state, no failure path. The only inputs are the text and the RNG.

pub mod classifier;
pub mod style;
pub mod vocab;

use rand::Rng;
use tracing::debug;

use crate::config::StyleConfig;
use crate::persona::classifier::IntentClassifier;
use crate::persona::style::StyleTransformer;
use crate::persona::vocab::PhraseBook;

/// Maps raw inbound text to a finished in-character reply.
pub struct Synthesizer {
    classifier: IntentClassifier,
    styler: StyleTransformer,
    vocab: PhraseBook,
}

impl Synthesizer {
    /// Synthesizer for the thebertcoin persona.
    pub fn bert(style: StyleConfig) -> Self {
        Self {
            classifier: IntentClassifier::bert(),
            styler: StyleTransformer::new(style),
            vocab: PhraseBook::bert(),
        }
    }

    /// Produce one stylized reply for `text`.
    ///
    /// Total over any input; an empty string classifies as generic and
    /// still yields a reply.
    pub fn respond<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        if let Some(reply) = self.command_reply(text, rng) {
            return self.styler.stylize(reply, &self.vocab, rng);
        }

        let category = self.classifier.classify(text);
        let phrase = self.vocab.pick(category, rng);
        debug!(category = category.label(), phrase, "Selected candidate phrase");
        self.styler.stylize(phrase, &self.vocab, rng)
    }

    /// `/start` and `/help` get dedicated pools. Other commands (and
    /// `/start@SomeBot` suffixed forms) fall through to classification.
    fn command_reply<R: Rng>(&self, text: &str, rng: &mut R) -> Option<&'static str> {
        let first = text.trim().split_whitespace().next()?;
        let command = first.split('@').next()?;
        match command {
            "/start" => Some(self.vocab.pick_welcome(rng)),
            "/help" => Some(self.vocab.pick_help(rng)),
            _ => None,
        }
    }
}
