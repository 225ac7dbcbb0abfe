//! Structured prompt flows: each flow is one schema-validated round trip to
//! the language model. Validate the typed input, render its prompt template,
//! invoke the model through the retry policy, and parse the raw response
//! against the declared output type. A response that does not parse is a
//! hard failure; there are no partial results and no response caching.

pub mod error;
pub mod flag;
pub mod negotiate;
pub mod prompt;
pub mod provider;
pub mod question;
pub mod retry;
pub mod scenario;
pub mod schema;
pub mod standards;
pub mod summarize;
pub mod testing;

pub use error::FlowError;
pub use flag::{FlagRiskyClauses, FlagRiskyClausesInput};
pub use negotiate::{SuggestNegotiations, SuggestNegotiationsInput};
pub use provider::{LanguageModel, OllamaClient};
pub use question::{AnswerUserQuestion, AnswerUserQuestionInput, AnswerUserQuestionOutput};
pub use retry::RetryPolicy;
pub use scenario::{SimulateScenario, SimulateScenarioInput, SimulateScenarioOutput};
pub use schema::{
    ClauseAnalysis, NegotiationSuggestion, RiskAssessment, RiskScore, StandardsComparison,
};
pub use standards::{CompareToStandards, CompareToStandardsInput};
pub use summarize::{SummarizeClause, SummarizeClauseInput, SummarizeClauseOutput};

use serde::de::DeserializeOwned;

/// One model round trip: invoke through the retry policy, normalise the raw
/// text, and parse it against the flow's output type.
pub async fn run_flow<T: DeserializeOwned>(
    model: &dyn LanguageModel,
    retry: &RetryPolicy,
    flow: &'static str,
    prompt: &str,
) -> Result<T, FlowError> {
    let raw = retry
        .retry(flow, || model.invoke(prompt))
        .await
        .map_err(FlowError::Provider)?;

    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(FlowError::EmptyResponse { flow });
    }

    serde_json::from_str(body).map_err(|source| FlowError::SchemaMismatch { flow, source })
}

/// Models occasionally wrap the JSON in a markdown code fence despite being
/// asked not to; unwrap it before parsing.
fn strip_code_fence(raw: &str) -> &str {
    let Some(inner) = raw.strip_prefix("```") else {
        return raw;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubModel;

    #[derive(Debug, serde::Deserialize)]
    struct Answer {
        answer: String,
    }

    #[tokio::test]
    async fn empty_response_is_its_own_error() {
        let model = StubModel::new("   ");
        let err = run_flow::<Answer>(&model, &RetryPolicy::default(), "test", "p")
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::EmptyResponse { flow: "test" }));
    }

    #[tokio::test]
    async fn fenced_json_is_unwrapped() {
        let model = StubModel::new("```json\n{\"answer\": \"yes\"}\n```");
        let parsed: Answer = run_flow(&model, &RetryPolicy::default(), "test", "p")
            .await
            .unwrap();

        assert_eq!(parsed.answer, "yes");
    }

    #[test]
    fn strip_code_fence_leaves_bare_json_alone() {
        assert_eq!(strip_code_fence(r#"{"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
    }
}
