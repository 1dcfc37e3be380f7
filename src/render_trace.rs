use crate::window_search::{SearchResult, SearchStep};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How one source position relates to the window of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Outside,
    Scanning,
    Valid,
    NewMinimum,
}

pub fn classify_cell(step: &SearchStep, index: usize) -> CellState {
    if index < step.left || index > step.right {
        return CellState::Outside;
    }
    if !step.is_valid {
        CellState::Scanning
    } else if step.is_minimal {
        CellState::NewMinimum
    } else {
        CellState::Valid
    }
}

pub fn in_result_span(result: &SearchResult, index: usize) -> bool {
    result.is_match() && index >= result.start_index && index <= result.end_index
}

pub fn status_label(step: &SearchStep) -> &'static str {
    if !step.is_valid {
        "Incomplete"
    } else if step.is_minimal {
        "New Minimum!"
    } else {
        "Valid Window"
    }
}

/// Source characters on one line, the window delimited with brackets,
/// eg `a a [b a a d] d a e`.
pub fn render_step_line(source: &str, step: &SearchStep) -> String {
    source
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let mut cell = c.to_string();
            if i == step.left {
                cell.insert(0, '[');
            }
            if i == step.right {
                cell.push(']');
            }
            cell
        })
        .join(" ")
}

pub fn render_step_info(step: &SearchStep, index: usize, total: usize) -> String {
    format!(
        "step {}/{}: left={} right={} window=\"{}\" [{}]",
        index + 1,
        total,
        step.left,
        step.right,
        step.window,
        status_label(step)
    )
}

/// One text frame per recorded step.
pub fn render_trace(source: &str, result: &SearchResult) -> Vec<String> {
    let total = result.steps.len();
    result
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                "{}\n{}",
                render_step_line(source, step),
                render_step_info(step, i, total)
            )
        })
        .collect()
}

/// The distinct characters the pattern requires, order-insensitive;
/// rendered sorted so output is deterministic.
pub fn pattern_legend(pattern: &str) -> Vec<char> {
    pattern.chars().unique().sorted().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window_search::WindowSearch;

    fn step(left: usize, right: usize, is_valid: bool, is_minimal: bool) -> SearchStep {
        SearchStep {
            left,
            right,
            window: String::new(),
            is_valid,
            is_minimal,
        }
    }

    #[test]
    fn test_classify_cell() {
        let scanning = step(2, 4, false, false);
        assert_eq!(classify_cell(&scanning, 1), CellState::Outside);
        assert_eq!(classify_cell(&scanning, 2), CellState::Scanning);
        assert_eq!(classify_cell(&scanning, 4), CellState::Scanning);
        assert_eq!(classify_cell(&scanning, 5), CellState::Outside);

        let valid = step(2, 4, true, false);
        assert_eq!(classify_cell(&valid, 3), CellState::Valid);

        let minimal = step(2, 4, true, true);
        assert_eq!(classify_cell(&minimal, 3), CellState::NewMinimum);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(&step(0, 0, false, false)), "Incomplete");
        assert_eq!(status_label(&step(0, 0, true, false)), "Valid Window");
        assert_eq!(status_label(&step(0, 0, true, true)), "New Minimum!");
    }

    #[test]
    fn test_render_step_line() {
        let s = step(2, 5, true, false);
        assert_eq!(render_step_line("aaabaaddae", &s), "a a [a b a a] d d a e");
        let single = step(3, 3, false, false);
        assert_eq!(render_step_line("abcd", &single), "a b c [d]");
    }

    #[test]
    fn test_render_step_info() {
        let mut s = step(1, 4, true, true);
        s.window = "DOBE".to_string();
        assert_eq!(
            render_step_info(&s, 0, 12),
            "step 1/12: left=1 right=4 window=\"DOBE\" [New Minimum!]"
        );
    }

    #[test]
    fn test_render_trace_one_frame_per_step() {
        let res = WindowSearch::search("ADOBECODEBANC", "ABC");
        let frames = render_trace("ADOBECODEBANC", &res);
        assert_eq!(frames.len(), res.steps.len());
        assert!(frames[0].contains("step 1/"));
    }

    #[test]
    fn test_in_result_span() {
        let res = WindowSearch::search("ADOBECODEBANC", "ABC");
        assert!(in_result_span(&res, 9));
        assert!(in_result_span(&res, 12));
        assert!(!in_result_span(&res, 8));

        let miss = WindowSearch::search("abc", "z");
        assert!(!in_result_span(&miss, 0));
    }

    #[test]
    fn test_pattern_legend() {
        assert_eq!(pattern_legend("aed"), vec!['a', 'd', 'e']);
        assert_eq!(pattern_legend("aabbaa"), vec!['a', 'b']);
        assert!(pattern_legend("").is_empty());
    }
}
