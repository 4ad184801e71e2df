use feedstats::readability::{self, consensus, formulas, ReadabilityMetrics, TextStats};
use rstest::rstest;

const EASY: &str = "The cat sat on the mat. The dog ran to the cat. They had fun in the sun. \
                    It was a good day.";

const HARD: &str = "The administration's comprehensive infrastructure legislation \
                    substantially accelerates investment opportunities. \
                    Constitutional considerations necessitate extraordinary deliberation. \
                    Intergovernmental cooperation facilitates economic revitalization.";

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t")]
#[case("... !!! ???")]
fn test_degenerate_text_is_neutral(#[case] text: &str) {
    let m = readability::score(text);
    assert_eq!(m.smog_index, 0.0);
    assert_eq!(m.flesch_reading_ease, 0.0);
    assert_eq!(m.flesch_kincaid_grade, 0.0);
    assert_eq!(m.text_standard, "N/A");
}

#[test]
fn test_easy_text_beats_hard_text() {
    let easy = readability::score(EASY);
    let hard = readability::score(HARD);

    assert!(easy.flesch_reading_ease > hard.flesch_reading_ease);
    assert!(easy.flesch_kincaid_grade < hard.flesch_kincaid_grade);
    assert!(easy.smog_index < hard.smog_index);
}

#[test]
fn test_metrics_use_text_statistics() {
    let m = readability::score(EASY);
    assert_eq!(m.stats.sentences, 4);
    assert_eq!(m.stats.words, 23);
    assert_eq!(m.stats, TextStats::from_text(EASY));
    assert_eq!(m.flesch_kincaid_grade, formulas::flesch_kincaid_grade(&m.stats));
}

#[test]
fn test_smog_zero_below_three_sentences() {
    let m = readability::score("Extraordinary deliberation. Comprehensive legislation.");
    assert_eq!(m.smog_index, 0.0);
    assert!(m.flesch_kincaid_grade > 0.0);
}

#[test]
fn test_text_standard_format() {
    let m = readability::score(HARD);
    assert!(
        m.text_standard.contains(" and ") && m.text_standard.ends_with(" grade"),
        "unexpected standard: {}",
        m.text_standard
    );
    let votes = consensus::grade_votes(HARD, &m.stats);
    assert!(votes.iter().all(|&g| (1..=20).contains(&g)));
}

#[test]
fn test_metrics_serialize_as_camel_case() {
    let json = serde_json::to_string(&ReadabilityMetrics::default()).unwrap();
    assert!(json.contains("\"smogIndex\":0.0"));
    assert!(json.contains("\"textStandard\":\"N/A\""));
}

#[test]
fn test_text_standard_bands_are_pinned() {
    // 23 one-syllable words in 4 sentences: grade formulas sit at or below
    // the floor, so the clamped minimum grade carries the vote.
    let easy = readability::score(EASY);
    assert_eq!(
        consensus::grade_votes(EASY, &easy.stats),
        vec![1, 1, 3, 4, 1, 1, 1, 1, 1, 2, 2, 3]
    );
    assert_eq!(easy.smog_index, 3.1);
    assert_eq!(easy.flesch_kincaid_grade, -1.5);
    assert_eq!(easy.text_standard, "0th and 1st grade");

    // 19 words, 3 sentences, 18 of them polysyllabic: most formulas clamp
    // at the ceiling.
    let hard = readability::score(HARD);
    assert_eq!(hard.stats.words, 19);
    assert_eq!(hard.stats.sentences, 3);
    assert_eq!(hard.stats.polysyllables, 18);
    assert_eq!(hard.text_standard, "19th and 20th grade");
}

#[test]
fn test_supporting_formulas_on_easy_text() {
    let stats = TextStats::from_text(EASY);
    // 65 letters over 23 words, 5.75 words per sentence
    assert_eq!(formulas::coleman_liau_index(&stats), -4.33);
    assert_eq!(formulas::automated_readability_index(&stats), -5.2);
    assert_eq!(formulas::gunning_fog(&stats), 2.3);
    assert_eq!(formulas::linsear_write(EASY), 1.9);
}
