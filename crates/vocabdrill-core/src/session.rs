//! Session scoring: counters, per-round feedback, and the final summary.

use std::fmt;

use serde::Serialize;

use crate::drill::grade_answer;
use crate::error::DrillError;
use crate::model::VocabularyEntry;

/// Running score for one practice session.
///
/// `correct` never exceeds `attempted`; both only grow through [`run_round`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    attempted: u32,
    correct: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    fn record(&mut self, is_correct: bool) {
        self.attempted = self.attempted.saturating_add(1);
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    /// Percentage of correct answers, or `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempted == 0 {
            return None;
        }
        Some(self.correct as f64 / self.attempted as f64 * 100.0)
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.accuracy().map(Verdict::from_accuracy)
    }
}

/// Encouragement shown under the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    KeepStudying,
}

impl Verdict {
    pub fn from_accuracy(percent: f64) -> Self {
        if percent >= 80.0 {
            Verdict::Excellent
        } else if percent >= 60.0 {
            Verdict::Good
        } else {
            Verdict::KeepStudying
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Excellent => write!(f, "Excellent work! Doskonale!"),
            Verdict::Good => write!(f, "Good job! Dobrze!"),
            Verdict::KeepStudying => write!(f, "Keep studying! Ucz się dalej!"),
        }
    }
}

/// Outcome of a single round, printed right after the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: String },
    Blank { expected: String },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => write!(f, "Correct!"),
            Feedback::Incorrect { expected } => {
                write!(f, "Incorrect. The answer was: {expected}")
            }
            Feedback::Blank { expected } => write!(
                f,
                "{} Incorrect. The answer was: {expected}",
                DrillError::EmptyInput.feedback()
            ),
        }
    }
}

/// Score one answer: `attempted` always grows by one, `correct` by one when
/// the answer matches. A blank answer counts as incorrect.
pub fn run_round(state: &mut SessionState, entry: &VocabularyEntry, answer: &str) -> Feedback {
    let feedback = match grade_answer(entry, answer) {
        Ok(true) => Feedback::Correct,
        Ok(false) => Feedback::Incorrect {
            expected: entry.target().to_string(),
        },
        Err(_) => Feedback::Blank {
            expected: entry.target().to_string(),
        },
    };
    state.record(feedback.is_correct());
    tracing::debug!(
        source = entry.source(),
        correct = feedback.is_correct(),
        attempted = state.attempted(),
        "round scored"
    );
    feedback
}

/// The final score line, e.g. `"3/5 correct"`.
pub fn summarize(state: &SessionState) -> String {
    format!("{}/{} correct", state.correct(), state.attempted())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> VocabularyEntry {
        VocabularyEntry::new("cześć", "hello").unwrap()
    }

    #[test]
    fn correct_answer_scores() {
        let mut state = SessionState::new();
        let feedback = run_round(&mut state, &hello(), "Hello");
        assert_eq!(feedback, Feedback::Correct);
        assert_eq!(feedback.to_string(), "Correct!");
        assert_eq!((state.attempted(), state.correct()), (1, 1));
    }

    #[test]
    fn wrong_answer_reveals_target() {
        let mut state = SessionState::new();
        let feedback = run_round(&mut state, &hello(), "goodbye");
        assert_eq!(feedback.to_string(), "Incorrect. The answer was: hello");
        assert_eq!((state.attempted(), state.correct()), (1, 0));
    }

    #[test]
    fn blank_answer_counts_as_incorrect() {
        let mut state = SessionState::new();
        let feedback = run_round(&mut state, &hello(), "  ");
        assert!(!feedback.is_correct());
        assert_eq!(
            feedback.to_string(),
            "No answer given. Incorrect. The answer was: hello"
        );
        assert_eq!((state.attempted(), state.correct()), (1, 0));
    }

    #[test]
    fn counters_never_cross() {
        let mut state = SessionState::new();
        let answers = ["hello", "nope", "", "HELLO ", "hallo", "hello"];
        for answer in answers {
            let before = state;
            run_round(&mut state, &hello(), answer);
            assert_eq!(state.attempted(), before.attempted() + 1);
            assert!(state.correct() - before.correct() <= 1);
            assert!(state.correct() <= state.attempted());
        }
        assert_eq!(summarize(&state), "3/6 correct");
    }

    #[test]
    fn empty_session_summary() {
        let state = SessionState::new();
        assert_eq!(summarize(&state), "0/0 correct");
        assert_eq!(state.accuracy(), None);
        assert_eq!(state.verdict(), None);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_accuracy(100.0), Verdict::Excellent);
        assert_eq!(Verdict::from_accuracy(80.0), Verdict::Excellent);
        assert_eq!(Verdict::from_accuracy(79.9), Verdict::Good);
        assert_eq!(Verdict::from_accuracy(60.0), Verdict::Good);
        assert_eq!(Verdict::from_accuracy(59.9), Verdict::KeepStudying);
        assert_eq!(Verdict::from_accuracy(0.0), Verdict::KeepStudying);
    }

    #[test]
    fn accuracy_is_a_percentage() {
        let mut state = SessionState::new();
        run_round(&mut state, &hello(), "hello");
        run_round(&mut state, &hello(), "hello");
        run_round(&mut state, &hello(), "hi");
        run_round(&mut state, &hello(), "hello");
        assert_eq!(state.accuracy(), Some(75.0));
        assert_eq!(state.verdict(), Some(Verdict::Good));
    }
}
