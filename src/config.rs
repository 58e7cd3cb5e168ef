//! Configuration types.
//!
//! All configuration is built once at startup and passed by reference —
//! there is no runtime-mutable global state anywhere in the bot.

use std::time::Duration;

/// Stage probabilities for the style transformer.
///
/// The three case fields partition a single draw: a roll below
/// `case_lower` lowercases everything, a roll below
/// `case_lower + case_upper` uppercases everything, a roll below
/// `case_lower + case_upper + case_mixed` randomizes case per word, and
/// anything above leaves the casing alone. Every other field gates its
/// stage with an independent Bernoulli draw.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Partition slice for lowercasing the whole reply.
    pub case_lower: f64,
    /// Partition slice for uppercasing the whole reply.
    pub case_upper: f64,
    /// Partition slice for per-word random case.
    pub case_mixed: f64,
    /// Per-word probability of swapping in a misspelling.
    pub word_swap: f64,
    /// Probability of inserting one interjection at a word boundary.
    pub interjection: f64,
    /// Probability of appending one paranoid tangent.
    pub tangent: f64,
    /// Probability of appending a binary or hex code string.
    pub code_string: f64,
    /// Probability of appending 1-3 trailing exclamation marks.
    pub bang: f64,
    /// Probability of appending 1-3 emoji.
    pub emoji: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            case_lower: 0.08,
            case_upper: 0.10,
            case_mixed: 0.05,
            word_swap: 0.25,
            interjection: 0.15,
            tangent: 0.12,
            code_string: 0.08,
            bang: 0.25,
            emoji: 0.20,
        }
    }
}

impl StyleConfig {
    /// Config where every stage always fires.
    pub fn always() -> Self {
        Self {
            case_lower: 0.0,
            case_upper: 1.0,
            case_mixed: 0.0,
            word_swap: 1.0,
            interjection: 1.0,
            tangent: 1.0,
            code_string: 1.0,
            bang: 1.0,
            emoji: 1.0,
        }
    }

    /// Config where no stage ever fires — `stylize` becomes the identity.
    pub fn never() -> Self {
        Self {
            case_lower: 0.0,
            case_upper: 0.0,
            case_mixed: 0.0,
            word_swap: 0.0,
            interjection: 0.0,
            tangent: 0.0,
            code_string: 0.0,
            bang: 0.0,
            emoji: 0.0,
        }
    }
}

/// Delivery retry and timeout policy.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// Retries after the first attempt; a delivery makes at most
    /// `max_retries + 1` calls to the endpoint.
    pub max_retries: u32,
    /// Per-attempt network timeout.
    pub attempt_timeout: Duration,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            attempt_timeout: Duration::from_secs(10),
        }
    }
}
