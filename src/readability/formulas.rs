//! Standard readability formulas.
//!
//! Every function returns `0.0` for text without words or sentences.

use super::stats::{words, TextStats};
use super::syllables::count_syllables;

/// Linsear Write looks at a fixed-size sample from the start of the text.
const LINSEAR_SAMPLE_WORDS: usize = 100;

/// SMOG is only defined for samples of at least this many sentences.
pub const SMOG_MIN_SENTENCES: usize = 3;

pub(crate) fn round_to(x: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (x * f).round() / f
}

/// `206.835 − 1.015 × ASL − 84.6 × ASW`
pub fn flesch_reading_ease(s: &TextStats) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let score = 206.835 - 1.015 * s.words_per_sentence() - 84.6 * s.syllables_per_word();
    round_to(score, 2)
}

/// `0.39 × ASL + 11.8 × ASW − 15.59`
pub fn flesch_kincaid_grade(s: &TextStats) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let grade = 0.39f64.mul_add(s.words_per_sentence(), 11.8 * s.syllables_per_word()) - 15.59;
    round_to(grade, 1)
}

/// `1.043 × √(polysyllables × 30 / sentences) + 3.1291`
pub fn smog_index(s: &TextStats) -> f64 {
    if s.is_empty() || s.sentences < SMOG_MIN_SENTENCES {
        return 0.0;
    }
    let poly = s.polysyllables as f64 * (30.0 / s.sentences as f64);
    round_to(1.043 * poly.sqrt() + 3.1291, 1)
}

/// `0.0588 × L − 0.296 × S − 15.8`, with L letters and S sentences per 100 words.
pub fn coleman_liau_index(s: &TextStats) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let l = s.letters_per_word() * 100.0;
    let sent = s.sentences as f64 / s.words as f64 * 100.0;
    round_to(0.0588 * l - 0.296 * sent - 15.8, 2)
}

/// `4.71 × letters/words + 0.5 × ASL − 21.43`
pub fn automated_readability_index(s: &TextStats) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let ari = 4.71 * s.letters_per_word() + 0.5 * s.words_per_sentence() - 21.43;
    round_to(ari, 1)
}

/// `0.4 × (ASL + 100 × complex/words)`; complex words have 3+ syllables.
pub fn gunning_fog(s: &TextStats) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let complex = s.polysyllables as f64 / s.words as f64 * 100.0;
    round_to(0.4 * (s.words_per_sentence() + complex), 2)
}

/// Linsear Write over the first hundred words.
///
/// Easy words (fewer than 3 syllables) score 1, hard words score 3. The sum is
/// divided by the sample's sentence count, then mapped onto a grade.
pub fn linsear_write(text: &str) -> f64 {
    let sample: Vec<&str> = words(text).take(LINSEAR_SAMPLE_WORDS).collect();
    if sample.is_empty() {
        return 0.0;
    }

    let points: usize = sample
        .iter()
        .map(|w| if count_syllables(w) >= 3 { 3 } else { 1 })
        .sum();

    let sample_stats = TextStats::from_text(&sample.join(" "));
    let sentences = sample_stats.sentences.max(1) as f64;

    let r = points as f64 / sentences;
    let grade = if r > 20.0 { r / 2.0 } else { (r - 2.0) / 2.0 };
    round_to(grade, 1)
}
