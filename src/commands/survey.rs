//! Survey every root word
//!
//! Counts how many acceptable words each root in the start list offers, to spot
//! roots that make for a thin game.

use super::solutions::find_solutions;
use crate::validation::WordListLexicon;
use crate::wordlists::DictionarySource;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::time::{Duration, Instant};

/// Solutions found for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
    pub longest: Option<String>,
}

/// Statistics over all surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub total_solutions: usize,
    pub average_solutions: f64,
    /// Most solutions first
    pub richest: Vec<RootSummary>,
    /// Fewest solutions first
    pub poorest: Vec<RootSummary>,
    /// Roots with no solutions at all
    pub barren: Vec<String>,
    pub total_time: Duration,
}

/// How many roots to list in the richest/poorest tables
const TABLE_SIZE: usize = 5;

/// Survey the roots of `source` (or the first `limit` of them)
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_survey(
    source: &DictionarySource,
    lexicon: &WordListLexicon,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let roots: Vec<&String> = source
        .words()
        .iter()
        .take(limit.unwrap_or(source.len()))
        .collect();

    let pb = if show_progress {
        ProgressBar::new(roots.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(roots.len());

    for root in roots {
        let result = find_solutions(root, lexicon);
        debug!("{root}: {} solutions", result.words.len());
        pb.set_message(root.clone());
        summaries.push(RootSummary {
            root: result.root.clone(),
            solutions: result.words.len(),
            longest: result.longest().map(str::to_string),
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(summaries, start.elapsed())
}

fn summarize(mut summaries: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();
    let total_solutions: usize = summaries.iter().map(|s| s.solutions).sum();
    let average_solutions = if total_roots > 0 {
        total_solutions as f64 / total_roots as f64
    } else {
        0.0
    };

    let barren = summaries
        .iter()
        .filter(|s| s.solutions == 0)
        .map(|s| s.root.clone())
        .collect();

    summaries.sort_by(|a, b| b.solutions.cmp(&a.solutions).then_with(|| a.root.cmp(&b.root)));
    let richest = summaries.iter().take(TABLE_SIZE).cloned().collect();
    let poorest = summaries.iter().rev().take(TABLE_SIZE).cloned().collect();

    SurveyStatistics {
        total_roots,
        total_solutions,
        average_solutions,
        richest,
        poorest,
        barren,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Language;

    fn lexicon() -> WordListLexicon {
        WordListLexicon::from_words(
            Language::English,
            ["silk", "worm", "milk", "owl", "board", "key", "bored"],
        )
    }

    fn source() -> DictionarySource {
        DictionarySource::new(vec![
            "silkworm".to_string(),
            "keyboard".to_string(),
            "zzzzzzzz".to_string(),
        ])
    }

    #[test]
    fn survey_counts_each_root() {
        let stats = run_survey(&source(), &lexicon(), None, false);
        assert_eq!(stats.total_roots, 3);
        // silkworm: silk worm milk owl; keyboard: board key bored
        assert_eq!(stats.total_solutions, 7);
        assert!((stats.average_solutions - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn survey_orders_tables() {
        let stats = run_survey(&source(), &lexicon(), None, false);
        assert_eq!(stats.richest[0].root, "silkworm");
        assert_eq!(stats.richest[0].solutions, 4);
        assert_eq!(stats.poorest[0].root, "zzzzzzzz");
        assert_eq!(stats.barren, vec!["zzzzzzzz"]);
    }

    #[test]
    fn survey_respects_limit() {
        let stats = run_survey(&source(), &lexicon(), Some(1), false);
        assert_eq!(stats.total_roots, 1);
        assert_eq!(stats.richest.len(), 1);
    }

    #[test]
    fn survey_of_nothing() {
        let stats = run_survey(&DictionarySource::default(), &lexicon(), None, false);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.average_solutions.abs() < f64::EPSILON);
        assert!(stats.richest.is_empty());
    }

    #[test]
    fn longest_solution_is_recorded() {
        let stats = run_survey(&source(), &lexicon(), Some(2), false);
        let keyboard = stats.richest.iter().find(|s| s.root == "keyboard").unwrap();
        assert_eq!(keyboard.longest.as_deref(), Some("board"));
    }
}
