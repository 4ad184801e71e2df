use std::collections::HashSet;

/// Appended to every kept post so posts read as separate sentences.
pub const SENTENCE_TERMINATOR: char = '.';

/// Keep posts containing none of `forbidden`, each terminated with a period.
pub fn filter_posts<S: AsRef<str>>(posts: &[S], forbidden: &HashSet<char>) -> Vec<String> {
    posts
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|p| !p.chars().any(|c| forbidden.contains(&c)))
        .map(|p| {
            let mut kept = String::with_capacity(p.len() + 1);
            kept.push_str(p);
            kept.push(SENTENCE_TERMINATOR);
            kept
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_posts_with_forbidden_chars() {
        let forbidden: HashSet<char> = "#@".chars().collect();
        let kept = filter_posts(
            &["hello world.", "check #this out", "plain text", "@you"],
            &forbidden,
        );
        assert_eq!(kept, vec!["hello world..", "plain text."]);
    }

    #[test]
    fn empty_forbidden_set_keeps_everything() {
        let kept = filter_posts(&["a", "b"], &HashSet::new());
        assert_eq!(kept, vec!["a.", "b."]);
    }
}
