//! Probabilistic style transformation.
//!
//! Six stages applied in a fixed order, each gated by its own draw from
//! the caller's RNG:
//!
//! 1. Case mutation (one draw partitions lower / upper / mixed / none)
//! 2. Lexical substitution (per-word draws against the misspelling table)
//! 3. Interjection insertion (one token at a random word boundary)
//! 4. Tangent append (one paranoid aside)
//! 5. Code-string append (nested draw: binary digits or `0x` hex)
//! 6. Decoration (trailing `!` run, then emoji sampled without replacement)
//!
//! Later stages operate on earlier output, so punctuation and emoji land
//! after substitutions and tangents. The transform reads nothing but its
//! input and the RNG stream: a seeded RNG reproduces output byte for byte.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::StyleConfig;
use crate::persona::vocab::PhraseBook;

const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";
const BINARY_LEN: usize = 8;
const HEX_LEN: usize = 6;

/// Applies the persona's stochastic text mutations.
pub struct StyleTransformer {
    config: StyleConfig,
}

impl StyleTransformer {
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// Run every stage over `text` in the fixed order.
    ///
    /// Never fails; if every draw misses, the input comes back unchanged.
    pub fn stylize<R: Rng>(&self, text: &str, vocab: &PhraseBook, rng: &mut R) -> String {
        let mut out = self.mutate_case(text, rng);
        out = self.swap_words(&out, vocab, rng);
        out = self.insert_interjection(&out, vocab, rng);
        out = self.append_tangent(&out, vocab, rng);
        out = self.append_code_string(&out, rng);
        self.decorate(&out, vocab, rng)
    }

    /// Stage 1: one draw picks lowercase-all, uppercase-all, per-word
    /// random case, or leaves the text alone.
    fn mutate_case<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        let roll: f64 = rng.gen_range(0.0..1.0);
        let cfg = &self.config;

        if roll < cfg.case_lower {
            text.to_lowercase()
        } else if roll < cfg.case_lower + cfg.case_upper {
            text.to_uppercase()
        } else if roll < cfg.case_lower + cfg.case_upper + cfg.case_mixed {
            text.split_whitespace()
                .map(|w| {
                    if rng.gen_bool(0.5) {
                        w.to_uppercase()
                    } else {
                        w.to_lowercase()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            text.to_string()
        }
    }

    /// Stage 2: per-word independent draws against the misspelling table.
    /// Trailing punctuation is kept on the substituted word. When no draw
    /// fires the input comes back untouched, whitespace included.
    fn swap_words<R: Rng>(&self, text: &str, vocab: &PhraseBook, rng: &mut R) -> String {
        let mut fired = false;
        let words: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                let core = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
                let suffix = &word[core.len()..];
                let key = core.to_lowercase();
                match vocab.misspellings.get(key.as_str()) {
                    Some(swap) if self.config.word_swap > 0.0
                        && rng.gen_bool(self.config.word_swap) =>
                    {
                        fired = true;
                        format!("{swap}{suffix}")
                    }
                    _ => word.to_string(),
                }
            })
            .collect();
        if fired {
            words.join(" ")
        } else {
            text.to_string()
        }
    }

    /// Stage 3: one interjection token at a uniformly random word boundary.
    fn insert_interjection<R: Rng>(&self, text: &str, vocab: &PhraseBook, rng: &mut R) -> String {
        if self.config.interjection <= 0.0 || !rng.gen_bool(self.config.interjection) {
            return text.to_string();
        }
        let Some(token) = vocab.interjections.choose(rng).copied() else {
            return text.to_string();
        };
        let mut words: Vec<&str> = text.split_whitespace().collect();
        let slot = rng.gen_range(0..=words.len());
        words.insert(slot, token);
        words.join(" ")
    }

    /// Stage 4: append one paranoid aside.
    fn append_tangent<R: Rng>(&self, text: &str, vocab: &PhraseBook, rng: &mut R) -> String {
        if self.config.tangent <= 0.0 || !rng.gen_bool(self.config.tangent) {
            return text.to_string();
        }
        match vocab.tangents.choose(rng) {
            Some(tangent) if text.is_empty() => (*tangent).to_string(),
            Some(tangent) => format!("{text}. {tangent}"),
            None => text.to_string(),
        }
    }

    /// Stage 5: nested draw — 50/50 binary digit string or `0x` hex string.
    fn append_code_string<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        if self.config.code_string <= 0.0 || !rng.gen_bool(self.config.code_string) {
            return text.to_string();
        }
        let code = if rng.gen_bool(0.5) {
            (0..BINARY_LEN)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect::<String>()
        } else {
            let digits: String = (0..HEX_LEN)
                .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
                .collect();
            format!("0x{digits}")
        };
        if text.is_empty() {
            code
        } else {
            format!("{text} {code}")
        }
    }

    /// Stage 6: trailing `!` run, then 1-3 emoji without replacement.
    fn decorate<R: Rng>(&self, text: &str, vocab: &PhraseBook, rng: &mut R) -> String {
        let mut out = text.to_string();

        if self.config.bang > 0.0 && rng.gen_bool(self.config.bang) && !out.ends_with('!') {
            let count = rng.gen_range(1..=3);
            out.extend(std::iter::repeat_n('!', count));
        }

        if self.config.emoji > 0.0 && rng.gen_bool(self.config.emoji) {
            let count = rng.gen_range(1..=3usize).min(vocab.emoji.len());
            let picked: Vec<&str> = vocab
                .emoji
                .choose_multiple(rng, count)
                .copied()
                .collect();
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&picked.concat());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fixture() -> (StyleTransformer, PhraseBook) {
        (StyleTransformer::new(StyleConfig::default()), PhraseBook::bert())
    }

    #[test]
    fn identical_seeds_produce_identical_output() {
        let (styler, vocab) = fixture();
        let input = "Chase dregens, not sherk. You too?";
        for seed in 0..64u64 {
            let a = styler.stylize(input, &vocab, &mut StdRng::seed_from_u64(seed));
            let b = styler.stylize(input, &vocab, &mut StdRng::seed_from_u64(seed));
            assert_eq!(a, b, "diverged at seed {seed}");
        }
    }

    #[test]
    fn never_config_is_the_identity() {
        let styler = StyleTransformer::new(StyleConfig::never());
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(1);
        let input = "BERT is the chosen one";
        assert_eq!(styler.stylize(input, &vocab, &mut rng), input);
    }

    #[test]
    fn never_config_preserves_interior_whitespace() {
        let styler = StyleTransformer::new(StyleConfig::never());
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(12);
        assert_eq!(styler.stylize("a  b", &vocab, &mut rng), "a  b");
    }

    #[test]
    fn never_config_keeps_whitespace_only_input_intact() {
        let styler = StyleTransformer::new(StyleConfig::never());
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(styler.stylize("   ", &vocab, &mut rng), "   ");
    }

    #[test]
    fn word_swap_without_table_matches_is_the_identity() {
        // Every draw would fire, but no word is in the table — the stage
        // must hand back the input untouched, double space included.
        let mut cfg = StyleConfig::never();
        cfg.word_swap = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(14);
        assert_eq!(
            styler.stylize("BERT  leads alone", &vocab, &mut rng),
            "BERT  leads alone"
        );
    }

    #[test]
    fn never_config_keeps_empty_input_empty() {
        let styler = StyleTransformer::new(StyleConfig::never());
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(styler.stylize("", &vocab, &mut rng), "");
    }

    #[test]
    fn empty_input_never_panics_at_full_volume() {
        let styler = StyleTransformer::new(StyleConfig::always());
        let vocab = PhraseBook::bert();
        for seed in 0..32u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = styler.stylize("", &vocab, &mut rng);
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn uppercase_partition_uppercases_everything() {
        let mut cfg = StyleConfig::never();
        cfg.case_upper = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            styler.stylize("no munkey business", &vocab, &mut rng),
            "NO MUNKEY BUSINESS"
        );
    }

    #[test]
    fn lowercase_partition_lowercases_everything() {
        let mut cfg = StyleConfig::never();
        cfg.case_lower = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            styler.stylize("BERT IS HERE", &vocab, &mut rng),
            "bert is here"
        );
    }

    #[test]
    fn word_swap_replaces_whole_words_and_keeps_punctuation() {
        let mut cfg = StyleConfig::never();
        cfg.word_swap = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            styler.stylize("You too? Chase cash, not shark.", &vocab, &mut rng),
            "u too? Chase cesh, not sherk."
        );
    }

    #[test]
    fn word_swap_is_case_insensitive_on_the_key() {
        let mut cfg = StyleConfig::never();
        cfg.word_swap = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(styler.stylize("CASH", &vocab, &mut rng), "cesh");
    }

    #[test]
    fn interjection_adds_exactly_one_token() {
        let mut cfg = StyleConfig::never();
        cfg.interjection = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(7);
        let out = styler.stylize("only bert business today", &vocab, &mut rng);
        let words: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(words.len(), 5);
        assert!(words.iter().any(|w| vocab.interjections.iter().any(|t| t == w)));
    }

    #[test]
    fn tangent_appends_a_known_aside() {
        let mut cfg = StyleConfig::never();
        cfg.tangent = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(8);
        let out = styler.stylize("BERT is here", &vocab, &mut rng);
        assert!(out.starts_with("BERT is here. "));
        assert!(vocab.tangents.iter().any(|t| out.ends_with(t)));
    }

    #[test]
    fn code_string_is_binary_or_prefixed_hex() {
        let mut cfg = StyleConfig::never();
        cfg.code_string = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        for seed in 0..16u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = styler.stylize("BERT", &vocab, &mut rng);
            let code = out.rsplit(' ').next().unwrap();
            let is_binary =
                code.len() == BINARY_LEN && code.chars().all(|c| c == '0' || c == '1');
            let is_hex = code.strip_prefix("0x").is_some_and(|d| {
                d.len() == HEX_LEN && d.bytes().all(|b| HEX_DIGITS.contains(&b))
            });
            assert!(is_binary || is_hex, "unexpected code string: {code}");
        }
    }

    #[test]
    fn bang_decoration_adds_one_to_three_marks() {
        let mut cfg = StyleConfig::never();
        cfg.bang = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(9);
        let out = styler.stylize("BERT is here", &vocab, &mut rng);
        let bangs = out.chars().rev().take_while(|c| *c == '!').count();
        assert!((1..=3).contains(&bangs), "got {bangs} marks in {out:?}");
    }

    #[test]
    fn bang_decoration_skips_text_already_ending_in_bang() {
        let mut cfg = StyleConfig::never();
        cfg.bang = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(styler.stylize("BERT!", &vocab, &mut rng), "BERT!");
    }

    #[test]
    fn emoji_decoration_samples_without_replacement() {
        let mut cfg = StyleConfig::never();
        cfg.emoji = 1.0;
        let styler = StyleTransformer::new(cfg);
        let vocab = PhraseBook::bert();
        for seed in 0..16u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = styler.stylize("BERT", &vocab, &mut rng);
            let tail = out.strip_prefix("BERT ").unwrap();
            let picked: Vec<&str> = vocab
                .emoji
                .iter()
                .copied()
                .filter(|e| tail.contains(e))
                .collect();
            assert!(!picked.is_empty());
            // Each pool entry appears at most once.
            for e in &picked {
                assert_eq!(tail.matches(e).count(), 1);
            }
        }
    }

    #[test]
    fn full_volume_output_contains_the_core_words() {
        // "wen moon" scenario: the candidate's core text survives the
        // transform (casing aside) because no stage deletes words.
        let styler = StyleTransformer::new(StyleConfig::always());
        let vocab = PhraseBook::bert();
        let mut rng = StdRng::seed_from_u64(11);
        let out = styler.stylize("Moon is BERT business", &vocab, &mut rng);
        assert!(out.to_lowercase().contains("moon"));
        assert!(!out.is_empty());
    }
}
