//! The BERT phrase book.
//!
//! Every word the bot can say lives here: per-category reply pools, the
//! misspelling table, interjections, paranoid tangents and the emoji
//! pool. Built once at startup and shared read-only; the pools are static
//! for the process lifetime.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::persona::classifier::Category;

/// Fixed vocabularies for one persona.
#[derive(Debug)]
pub struct PhraseBook {
    greetings: Vec<&'static str>,
    farewells: Vec<&'static str>,
    crypto: Vec<&'static str>,
    identity: Vec<&'static str>,
    moon: Vec<&'static str>,
    business: Vec<&'static str>,
    question: Vec<&'static str>,
    generic: Vec<&'static str>,
    welcome: Vec<&'static str>,
    help: Vec<&'static str>,
    /// Whole-word substitutions, keyed by lowercase original.
    pub misspellings: HashMap<&'static str, &'static str>,
    /// Exclamation tokens dropped mid-sentence.
    pub interjections: Vec<&'static str>,
    /// Unrelated paranoid asides appended verbatim.
    pub tangents: Vec<&'static str>,
    /// Decoration pool, mixed categories on purpose.
    pub emoji: Vec<&'static str>,
}

impl PhraseBook {
    /// The thebertcoin persona.
    pub fn bert() -> Self {
        let misspellings = HashMap::from([
            ("cash", "cesh"),
            ("money", "muney"),
            ("monkey", "munkey"),
            ("shark", "sherk"),
            ("dragons", "dregens"),
            ("this", "dis"),
            ("brothers", "berthrens"),
            ("friends", "frens"),
            ("what", "wut"),
            ("you", "u"),
            ("good", "gud"),
            ("morning", "mornin"),
            ("later", "l8r"),
        ]);

        Self {
            greetings: vec![
                "GM Berthrens",
                "GM. BERT is here",
                "Good morning. Only BERT business today",
                "GM. No munkey business",
                "GM. BERT is the chosen one",
                "GM. Chase dregens, not sherk",
            ],
            farewells: vec![
                "Goodbye Berthrens",
                "BERT out. No more business",
                "See you later. Only BERT knows",
                "Bye. BERT is the chosen one",
                "End transmission. You too?",
                "BERT signing off. Berthrens know dis",
            ],
            crypto: vec![
                "BERT is the chosen one. No cesh needed",
                "Only BERT business. No munkey business",
                "Chase dregens, not sherk. You too?",
                "BERT has all the cesh. Berthrens know dis",
                "No warning needed. BERT is here",
                "BERT business only. No other business",
                "Cesh is temporary. BERT is forever",
                "Dregens bring cesh. BERT brings truth",
            ],
            identity: vec![
                "BERT is the chosen one",
                "Donald Bert is here",
                "BERT no chase. BERT lead",
                "Berthrens know BERT",
                "BERT is special. No other like BERT",
                "BERT business only. No munkey business",
                "BERT is the one. You too?",
                "BERT has power. Berthrens see dis",
            ],
            moon: vec![
                "Moon comes when BERT says. No warning needed",
                "Wen moon? When Berthrens believe",
                "BERT no chase moon. Moon chase BERT",
                "Moon is BERT business. Berthrens know dis",
                "No moon for sherk. Moon for Berthrens only",
            ],
            business: vec![
                "No munkey business. Only BERT business",
                "BERT business is good business",
                "No other business. Only BERT",
                "BERT make business. You follow",
                "Business is BERT. BERT is business",
                "No warning needed. BERT handle business",
                "BERT business bring cesh. You too?",
                "Only BERT know business. Berthrens trust",
            ],
            question: vec![
                "BERT know the answer. You too?",
                "Only BERT can say",
                "Berthrens ask. BERT answer",
                "Good question. Only BERT business answer",
                "BERT know. BERT no tell sherk",
            ],
            generic: vec![
                "BERT is here",
                "No munkey business",
                "Only BERT business",
                "BERT is the chosen one",
                "Berthrens know dis",
                "You too?",
                "BERT no chase",
                "Chase dregens, not sherk",
                "BERT has power",
                "No warning needed",
                "BERT make cesh",
                "Only BERT know",
                "BERT is special",
                "No other like BERT",
                "BERT lead. You follow",
            ],
            welcome: vec![
                "GM Berthrens. BERT is here. No munkey business. Only BERT business.",
                "GM. BERT is the chosen one. You too?",
                "GM. BERT welcome you. No warning needed. Berthrens know dis.",
                "GM. BERT is special. No other like BERT. Chase dregens, not sherk.",
            ],
            help: vec![
                "BERT is simple. BERT is here. No complex business. Only BERT business.",
                "BERT help you. BERT is the chosen one. No munkey business needed.",
                "BERT guide you. BERT know all. Berthrens trust BERT. You too?",
                "BERT is here to help. No warning needed. BERT make everything simple.",
            ],
            misspellings,
            interjections: vec!["BERT!", "BERTHRENS!", "NO MUNKEY!", "DIS!"],
            tangents: vec![
                "the sherks are watching",
                "dey track the dregens",
                "munkeys listen to everything",
                "no one warn BERT. BERT warn himself",
                "trust no sherk",
            ],
            emoji: vec![
                "\u{1F680}", // rocket
                "\u{1F315}", // full moon
                "\u{1F48E}", // gem
                "\u{1F64C}", // raised hands
                "\u{1F435}", // monkey face
                "\u{1F988}", // shark
                "\u{1F409}", // dragon
                "\u{1F4C8}", // chart up
                "\u{1F525}", // fire
                "\u{1F4B0}", // money bag
                "\u{1F916}", // robot
                "\u{1F451}", // crown
            ],
        }
    }

    /// The candidate pool for one category.
    pub fn pool(&self, category: Category) -> &[&'static str] {
        match category {
            Category::Greeting => &self.greetings,
            Category::Farewell => &self.farewells,
            Category::Identity => &self.identity,
            Category::Crypto => &self.crypto,
            Category::MoonTiming => &self.moon,
            Category::Business => &self.business,
            Category::Question => &self.question,
            Category::Generic => &self.generic,
        }
    }

    /// Pick one phrase uniformly at random from a category's pool.
    pub fn pick<R: Rng>(&self, category: Category, rng: &mut R) -> &'static str {
        // Pools are non-empty by construction; the fallback keeps this total.
        self.pool(category).choose(rng).copied().unwrap_or("BERT is here")
    }

    /// Pick a `/start` welcome line.
    pub fn pick_welcome<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.welcome.choose(rng).copied().unwrap_or("GM Berthrens")
    }

    /// Pick a `/help` line.
    pub fn pick_help<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.help.choose(rng).copied().unwrap_or("BERT is simple")
    }
}
