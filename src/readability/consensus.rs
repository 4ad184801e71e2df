use super::formulas;
use super::stats::TextStats;

pub const NOT_AVAILABLE: &str = "N/A";

/// Grade votes are clamped into this band.
const MIN_GRADE: i64 = 1;
const MAX_GRADE: i64 = 20;

fn push_floor_ceil(votes: &mut Vec<i64>, score: f64) {
    votes.push(score.floor() as i64);
    votes.push(score.ceil() as i64);
}

/// Map a Flesch Reading Ease score onto school grades.
fn reading_ease_grades(score: f64) -> &'static [i64] {
    match score {
        s if s >= 100.0 => &[],
        s if s >= 90.0 => &[5],
        s if s >= 80.0 => &[6],
        s if s >= 70.0 => &[7],
        s if s >= 60.0 => &[8, 9],
        s if s >= 50.0 => &[10],
        s if s >= 40.0 => &[11],
        _ => &[12],
    }
}

/// Every grade vote cast by the individual formulas.
pub fn grade_votes(text: &str, stats: &TextStats) -> Vec<i64> {
    let mut votes = Vec::with_capacity(14);

    push_floor_ceil(&mut votes, formulas::flesch_kincaid_grade(stats));
    votes.extend_from_slice(reading_ease_grades(formulas::flesch_reading_ease(stats)));
    push_floor_ceil(&mut votes, formulas::smog_index(stats));
    push_floor_ceil(&mut votes, formulas::coleman_liau_index(stats));
    push_floor_ceil(&mut votes, formulas::automated_readability_index(stats));
    push_floor_ceil(&mut votes, formulas::linsear_write(text));
    push_floor_ceil(&mut votes, formulas::gunning_fog(stats));

    votes
        .into_iter()
        .map(|g| g.clamp(MIN_GRADE, MAX_GRADE))
        .collect()
}

/// The most-voted grade. Ties go to the grade whose first vote came first.
pub fn consensus_grade(votes: &[i64]) -> Option<i64> {
    // (grade, count) in first-vote order
    let mut tally: Vec<(i64, usize)> = Vec::new();
    for &g in votes {
        match tally.iter_mut().find(|(grade, _)| *grade == g) {
            Some((_, count)) => *count += 1,
            None => tally.push((g, 1)),
        }
    }

    let mut best: Option<(i64, usize)> = None;
    for (grade, count) in tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((grade, count));
        }
    }
    best.map(|(grade, _)| grade)
}

pub fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Consensus grade band, e.g. `"9th and 10th grade"`.
///
/// Text without words yields [`NOT_AVAILABLE`].
pub fn text_standard(text: &str, stats: &TextStats) -> String {
    if stats.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    match consensus_grade(&grade_votes(text, stats)) {
        Some(g) => format!("{} and {} grade", ordinal(g - 1), ordinal(g)),
        None => NOT_AVAILABLE.to_string(),
    }
}
