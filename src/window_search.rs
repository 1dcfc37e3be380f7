use crate::char_frequency::CharFrequency;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One snapshot of the scan: the window `left..=right`, whether it covers
/// the pattern, and whether it was strictly shorter than the best window
/// known at the moment it was recorded. A step flagged minimal can be
/// superseded by a later, shorter one; flags are never rewritten.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub left: usize,
    pub right: usize,
    pub window: String,
    pub is_valid: bool,
    pub is_minimal: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub result: String,
    pub start_index: usize,
    pub end_index: usize,
    pub steps: Vec<SearchStep>,
}

impl SearchResult {
    /// False means no window of the source covers the pattern.
    #[inline(always)]
    pub fn is_match(&self) -> bool {
        !self.result.is_empty()
    }
}

pub struct WindowSearch;

impl WindowSearch {
    /// Finds the shortest contiguous run of `source` containing every
    /// character of `pattern` at least as often as `pattern` does, with
    /// ties broken by earliest start, and records every window the scan
    /// examined.
    ///
    /// Indices are character positions (`char` units), not byte offsets.
    /// An empty pattern is trivially covered, so the scan shrinks each
    /// window immediately and the recorded best degenerates to the first
    /// single-character window (`result` is the first source character,
    /// indices 0/0). When no covering window exists, `result` is empty
    /// and the indices are 0/0.
    pub fn search(source: &str, pattern: &str) -> SearchResult {
        let source_chars: Vec<char> = source.chars().collect();
        let required = CharFrequency::from_sequence(pattern);
        let mut window = CharFrequency::default();
        let mut satisfied = 0;
        let mut left = 0;
        let mut best_len: Option<usize> = None;
        let mut best_start = 0;
        let mut best_end = 0;
        let mut steps = vec![];

        for right in 0..source_chars.len() {
            let entering = source_chars[right];
            window.add(entering);
            if required.contains(entering) && window.count(entering) == required.count(entering) {
                satisfied += 1;
            }

            // Shrink from the left for as long as the window stays covering
            while left <= right && satisfied == required.distinct() {
                let length = right - left + 1;
                let is_minimal = best_len.is_none_or(|best| length < best);
                steps.push(SearchStep {
                    left,
                    right,
                    window: source_chars[left..=right].iter().collect(),
                    is_valid: true,
                    is_minimal,
                });
                if is_minimal {
                    best_len = Some(length);
                    best_start = left;
                    best_end = right;
                }

                let leaving = source_chars[left];
                window.remove(leaving);
                if required.contains(leaving) && window.count(leaving) < required.count(leaving) {
                    satisfied -= 1;
                }
                left += 1;
            }

            if satisfied < required.distinct() {
                steps.push(SearchStep {
                    left,
                    right,
                    window: source_chars[left..=right].iter().collect(),
                    is_valid: false,
                    is_minimal: false,
                });
            }
        }

        match best_len {
            Some(_) => SearchResult {
                result: source_chars[best_start..=best_end].iter().collect(),
                start_index: best_start,
                end_index: best_end,
                steps,
            },
            None => SearchResult {
                result: String::new(),
                start_index: 0,
                end_index: 0,
                steps,
            },
        }
    }

    /// Runs independent searches in parallel. Each invocation is pure and
    /// shares no state with the others.
    pub fn search_all(pairs: &[(String, String)]) -> Vec<SearchResult> {
        pairs
            .par_iter()
            .map(|(source, pattern)| Self::search(source, pattern))
            .collect()
    }
}
