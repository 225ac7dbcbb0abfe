//! Canonical analysis schema, shared by every flow and by the API layer.
//!
//! Field names and the risk-tier wire strings match what existing clients of
//! the analysis already consume, so they are pinned with serde attributes.

use serde::{Deserialize, Serialize};

/// Three-tier severity attached to a clause or a simulated outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskScore {
    #[serde(rename = "🟢 Low")]
    Low,
    #[serde(rename = "🟡 Medium")]
    Medium,
    #[serde(rename = "🔴 High")]
    High,
}

impl RiskScore {
    /// Plain-text tier name, without the wire-format glyph.
    pub fn label(&self) -> &'static str {
        match self {
            RiskScore::Low => "Low",
            RiskScore::Medium => "Medium",
            RiskScore::High => "High",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub is_risky: bool,
    pub risk_score: RiskScore,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsComparison {
    pub comparison: String,
    pub is_standard: bool,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationSuggestion {
    pub negotiation_suggestions: Vec<String>,
    pub rationale: String,
}

/// One contractual provision with its full bundled analysis. The three
/// analysis records are required; only the id may be absent in model output,
/// in which case the orchestrator synthesizes one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseAnalysis {
    #[serde(default)]
    pub id: String,
    pub clause_text: String,
    pub summary: String,
    pub risk_assessment: RiskAssessment,
    pub standards_comparison: StandardsComparison,
    pub negotiation_suggestion: NegotiationSuggestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_score_round_trips_through_wire_strings() {
        for (score, wire) in [
            (RiskScore::Low, "\"🟢 Low\""),
            (RiskScore::Medium, "\"🟡 Medium\""),
            (RiskScore::High, "\"🔴 High\""),
        ] {
            assert_eq!(serde_json::to_string(&score).unwrap(), wire);
            assert_eq!(serde_json::from_str::<RiskScore>(wire).unwrap(), score);
        }
    }

    #[test]
    fn clause_analysis_parses_with_missing_id() {
        let json = r#"{
            "clauseText": "The landlord may enter at any time.",
            "summary": "The landlord can come in whenever they want.",
            "riskAssessment": {"isRisky": true, "riskScore": "🔴 High", "rationale": "No notice period."},
            "standardsComparison": {"comparison": "Most leases require 24h notice.", "isStandard": false, "rationale": "Unusual."},
            "negotiationSuggestion": {"negotiationSuggestions": ["Ask for a 24h notice clause."], "rationale": "Protects privacy."}
        }"#;

        let clause: ClauseAnalysis = serde_json::from_str(json).unwrap();
        assert!(clause.id.is_empty());
        assert_eq!(clause.risk_assessment.risk_score, RiskScore::High);
    }

    #[test]
    fn non_risky_fixture_carries_the_low_tier() {
        // The prompt contract: a clause that is not risky is always reported
        // with the Low tier and the fixed standard-clause rationale.
        let json = r#"{
            "isRisky": false,
            "riskScore": "🟢 Low",
            "rationale": "This is a standard and fair clause."
        }"#;

        let assessment: RiskAssessment = serde_json::from_str(json).unwrap();
        assert!(!assessment.is_risky);
        assert_eq!(assessment.risk_score, RiskScore::Low);
    }
}
