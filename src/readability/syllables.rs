const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

#[inline(always)]
fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Heuristic English syllable count for a single word.
///
/// Counts vowel groups, drops a silent trailing `e` (but keeps consonant +
/// `le`, as in "table"). Any non-empty word has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let w: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if w.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &w {
        let v = is_vowel(c);
        if v && !prev_vowel {
            count += 1;
        }
        prev_vowel = v;
    }

    let n = w.len();
    if count > 1 && w[n - 1] == 'e' {
        let consonant_le = n >= 3 && w[n - 2] == 'l' && !is_vowel(w[n - 3]);
        if !consonant_le {
            count -= 1;
        }
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("Readability"), 5);
        assert_eq!(count_syllables("communication"), 5);
    }

    #[test]
    fn degenerate_words() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("..."), 0);
        assert_eq!(count_syllables("hmm"), 1);
        assert_eq!(count_syllables("2016"), 1);
    }
}
