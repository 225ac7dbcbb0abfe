use std::collections::HashSet;

use flows::{AnswerUserQuestionOutput, ClauseAnalysis, SimulateScenarioOutput};
use serde::Serialize;
use uuid::Uuid;

use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Empty,
    Extracting,
    Analyzing,
    Ready,
}

/// Result slot for one side panel (Q&A or Scenario). Each panel owns its own
/// busy flag and last result/error, decoupled from the clause list and from
/// the other panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSlot<T> {
    pub busy: bool,
    pub last_result: Option<T>,
    pub last_error: Option<String>,
}

impl<T> Default for PanelSlot<T> {
    fn default() -> Self {
        Self {
            busy: false,
            last_result: None,
            last_error: None,
        }
    }
}

impl<T> PanelSlot<T> {
    pub(crate) fn begin(&mut self) {
        self.busy = true;
        self.last_result = None;
        self.last_error = None;
    }

    pub(crate) fn finish_ok(&mut self, result: T) {
        self.busy = false;
        self.last_result = Some(result);
    }

    pub(crate) fn finish_err(&mut self, error: String) {
        self.busy = false;
        self.last_error = Some(error);
    }
}

/// One document session: the lifetime of an uploaded document from
/// submission to reset. All state is in memory and dies with the process.
#[derive(Debug)]
pub struct Session {
    pub state: SessionState,
    pub document: Option<Document>,
    pub clauses: Vec<ClauseAnalysis>,
    pub selected_clause_id: Option<String>,
    pub qa: PanelSlot<AnswerUserQuestionOutput>,
    pub scenario: PanelSlot<SimulateScenarioOutput>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Empty,
            document: None,
            clauses: Vec::new(),
            selected_clause_id: None,
            qa: PanelSlot::default(),
            scenario: PanelSlot::default(),
        }
    }

    /// Back to Empty, discarding the document, clauses and both panel slots.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// Store the analysis result and move to Ready: ids are made unique,
    /// and the initial detail selection prefers the first risky clause.
    pub fn store_clauses(&mut self, clauses: Vec<ClauseAnalysis>) {
        self.clauses = assign_unique_ids(clauses);
        self.selected_clause_id = select_initial_clause(&self.clauses);
        self.state = SessionState::Ready;
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state,
            document: self.document.clone(),
            clauses: self.clauses.clone(),
            selected_clause_id: self.selected_clause_id.clone(),
            qa: self.qa.clone(),
            scenario: self.scenario.clone(),
        }
    }
}

/// Serializable snapshot of the session for the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub state: SessionState,
    pub document: Option<Document>,
    pub clauses: Vec<ClauseAnalysis>,
    pub selected_clause_id: Option<String>,
    pub qa: PanelSlot<AnswerUserQuestionOutput>,
    pub scenario: PanelSlot<SimulateScenarioOutput>,
}

/// The model may omit ids or repeat them; every clause leaves here with a
/// unique one. Already-unique ids are kept, everything else gets a fresh
/// UUID. Running this twice changes nothing.
fn assign_unique_ids(mut clauses: Vec<ClauseAnalysis>) -> Vec<ClauseAnalysis> {
    let mut seen = HashSet::new();
    for clause in &mut clauses {
        if clause.id.is_empty() || !seen.insert(clause.id.clone()) {
            let fresh = Uuid::new_v4().to_string();
            seen.insert(fresh.clone());
            clause.id = fresh;
        }
    }
    clauses
}

fn select_initial_clause(clauses: &[ClauseAnalysis]) -> Option<String> {
    clauses
        .iter()
        .find(|c| c.risk_assessment.is_risky)
        .or_else(|| clauses.first())
        .map(|c| c.id.clone())
}

#[cfg(test)]
mod tests {
    use flows::{NegotiationSuggestion, RiskAssessment, RiskScore, StandardsComparison};

    use super::*;

    fn clause(id: &str, risky: bool) -> ClauseAnalysis {
        ClauseAnalysis {
            id: id.to_string(),
            clause_text: "text".to_string(),
            summary: "summary".to_string(),
            risk_assessment: RiskAssessment {
                is_risky: risky,
                risk_score: if risky { RiskScore::High } else { RiskScore::Low },
                rationale: "rationale".to_string(),
            },
            standards_comparison: StandardsComparison {
                comparison: "comparison".to_string(),
                is_standard: !risky,
                rationale: "rationale".to_string(),
            },
            negotiation_suggestion: NegotiationSuggestion {
                negotiation_suggestions: vec![],
                rationale: "rationale".to_string(),
            },
        }
    }

    #[test]
    fn missing_ids_are_synthesized() {
        let clauses = assign_unique_ids(vec![clause("", false), clause("c-2", false)]);

        assert!(!clauses[0].id.is_empty());
        assert_eq!(clauses[1].id, "c-2");
    }

    #[test]
    fn duplicate_ids_are_rewritten() {
        let clauses = assign_unique_ids(vec![
            clause("dup", false),
            clause("dup", true),
            clause("dup", false),
        ]);

        assert_eq!(clauses[0].id, "dup");
        assert_ne!(clauses[1].id, "dup");
        assert_ne!(clauses[2].id, "dup");
        assert_ne!(clauses[1].id, clauses[2].id);
    }

    #[test]
    fn unique_ids_are_left_alone() {
        let before = vec![clause("a", false), clause("b", true)];
        let after = assign_unique_ids(before.clone());

        assert_eq!(after[0].id, "a");
        assert_eq!(after[1].id, "b");
    }

    #[test]
    fn initial_selection_prefers_the_first_risky_clause() {
        let mut session = Session::new();
        session.store_clauses(vec![clause("a", false), clause("b", true), clause("c", true)]);

        assert_eq!(session.state, SessionState::Ready);
        assert_eq!(session.selected_clause_id.as_deref(), Some("b"));
    }

    #[test]
    fn initial_selection_falls_back_to_the_first_clause() {
        let mut session = Session::new();
        session.store_clauses(vec![clause("a", false), clause("b", false)]);

        assert_eq!(session.selected_clause_id.as_deref(), Some("a"));
    }

    #[test]
    fn empty_clause_list_selects_nothing() {
        let mut session = Session::new();
        session.store_clauses(vec![]);

        assert_eq!(session.state, SessionState::Ready);
        assert!(session.selected_clause_id.is_none());
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = Session::new();
        session.store_clauses(vec![clause("a", true)]);
        session.qa.finish_ok(AnswerUserQuestionOutput {
            answer: "No".to_string(),
        });

        session.reset();

        assert_eq!(session.state, SessionState::Empty);
        assert!(session.clauses.is_empty());
        assert!(session.selected_clause_id.is_none());
        assert!(session.qa.last_result.is_none());
    }
}
