use crate::render_trace::{pattern_legend, render_step_info, render_step_line, render_trace};
use crate::window_search::{SearchResult, WindowSearch};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Operation {
    Search {
        source: String,
        pattern: String,
    },
    Trace {
        source: String,
        pattern: String,
    },
    RenderStep {
        source: String,
        pattern: String,
        step_index: usize,
    },
    Legend {
        pattern: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpOutput {
    Search(SearchResult),
    Trace(Vec<String>),
    RenderStep(String),
    Legend(Vec<char>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    InvalidInput,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineError {
    pub code: ErrorCode,
    pub message: String,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for EngineError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    pub protocol_version: String,
    pub supported_operations: Vec<String>,
    pub deterministic_trace: bool,
}

/// Stateless operation surface over the search. Every operation is a pure
/// function of its payload, so nothing is carried between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinwinEngine;

impl MinwinEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn capabilities() -> Capabilities {
        Capabilities {
            protocol_version: "v1".to_string(),
            supported_operations: vec![
                "Search".to_string(),
                "Trace".to_string(),
                "RenderStep".to_string(),
                "Legend".to_string(),
            ],
            deterministic_trace: true,
        }
    }

    pub fn apply(&self, op: Operation) -> Result<OpOutput, EngineError> {
        match op {
            Operation::Search { source, pattern } => {
                Ok(OpOutput::Search(WindowSearch::search(&source, &pattern)))
            }
            Operation::Trace { source, pattern } => {
                let result = WindowSearch::search(&source, &pattern);
                Ok(OpOutput::Trace(render_trace(&source, &result)))
            }
            Operation::RenderStep {
                source,
                pattern,
                step_index,
            } => {
                let result = WindowSearch::search(&source, &pattern);
                let step = result.steps.get(step_index).ok_or_else(|| EngineError {
                    code: ErrorCode::InvalidInput,
                    message: format!(
                        "Step index {step_index} out of range, trace has {} steps",
                        result.steps.len()
                    ),
                })?;
                Ok(OpOutput::RenderStep(format!(
                    "{}\n{}",
                    render_step_line(&source, step),
                    render_step_info(step, step_index, result.steps.len())
                )))
            }
            Operation::Legend { pattern } => Ok(OpOutput::Legend(pattern_legend(&pattern))),
        }
    }

    pub fn apply_json(&self, payload: &str) -> Result<OpOutput, EngineError> {
        let op: Operation = serde_json::from_str(payload).map_err(|e| EngineError {
            code: ErrorCode::InvalidInput,
            message: format!("Could not parse operation JSON: {e}"),
        })?;
        self.apply(op)
    }
}
