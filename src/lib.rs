//! bertbot — stateless Telegram persona bot.
//!
//! Inbound text is classified into a category, a candidate phrase is
//! drawn from that category's pool, a stack of probabilistic style
//! mutations runs over it, and the result is delivered exactly once
//! through a process-wide serialized gate with timeout-only retries.

pub mod bot;
pub mod config;
pub mod delivery;
pub mod error;
pub mod persona;
pub mod server;
