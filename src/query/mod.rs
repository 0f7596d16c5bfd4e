//! The query service: sanitize, match, synthesize.
//!
//! This is the one entry point the transport layer and CLI call. It is total:
//! any (question, document) pair yields an outcome, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::answer;
use crate::sanitize::{self, Limits};
use crate::search::{self, Matches};

/// The outcome of one question against one universe document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub answer: String,
    pub matches: Matches,
}

/// Answer a question about an untrusted universe document, default limits.
pub fn answer_question(question: &str, raw_universe: &Value) -> QueryOutcome {
    answer_question_with_limits(question, raw_universe, &Limits::default())
}

/// Answer a question about an untrusted universe document.
pub fn answer_question_with_limits(
    question: &str,
    raw_universe: &Value,
    limits: &Limits,
) -> QueryOutcome {
    let universe = sanitize::sanitize_with_limits(raw_universe, limits);
    let matches = search::search(&universe, question, limits);
    let answer = answer::synthesize(&matches);

    QueryOutcome { answer, matches }
}
