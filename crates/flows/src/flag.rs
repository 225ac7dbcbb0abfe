use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::provider::LanguageModel;
use crate::retry::RetryPolicy;
use crate::schema::ClauseAnalysis;
use crate::{prompt, run_flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRiskyClausesInput {
    pub document_text: String,
    pub document_type: String,
    pub user_profile: String,
    pub jurisdiction: String,
}

impl FlagRiskyClausesInput {
    fn validate(&self) -> Result<(), FlowError> {
        if self.document_text.trim().is_empty() {
            return Err(FlowError::invalid_input("documentText", "must not be empty"));
        }
        if self.document_type.trim().is_empty() {
            return Err(FlowError::invalid_input("documentType", "must not be empty"));
        }
        if self.user_profile.trim().is_empty() {
            return Err(FlowError::invalid_input("userProfile", "must not be empty"));
        }
        if self.jurisdiction.trim().is_empty() {
            return Err(FlowError::invalid_input("jurisdiction", "must not be empty"));
        }
        Ok(())
    }
}

/// Splits the document into clauses and analyses every one of them in a
/// single model round trip. The model performs its own clause segmentation;
/// the output is a JSON array with one fully analysed entry per clause.
#[derive(Clone)]
pub struct FlagRiskyClauses {
    model: Arc<dyn LanguageModel>,
    retry: RetryPolicy,
}

impl FlagRiskyClauses {
    pub fn new(model: Arc<dyn LanguageModel>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    pub async fn run(
        &self,
        input: &FlagRiskyClausesInput,
    ) -> Result<Vec<ClauseAnalysis>, FlowError> {
        input.validate()?;
        let prompt = prompt::build_flag_risky_clauses_prompt(
            &input.document_text,
            &input.document_type,
            &input.user_profile,
            &input.jurisdiction,
        );
        run_flow(self.model.as_ref(), &self.retry, "flagRiskyClauses", &prompt).await
    }
}
