use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::provider::LanguageModel;
use crate::retry::RetryPolicy;
use crate::schema::NegotiationSuggestion;
use crate::{prompt, run_flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestNegotiationsInput {
    pub clause_text: String,
    pub document_type: String,
    pub user_profile: String,
    pub jurisdiction: String,
}

impl SuggestNegotiationsInput {
    fn validate(&self) -> Result<(), FlowError> {
        if self.clause_text.trim().is_empty() {
            return Err(FlowError::invalid_input("clauseText", "must not be empty"));
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

/// Produces negotiation talking points tailored to the user's role and
/// jurisdiction. The suggestion list may legitimately be empty.
#[derive(Clone)]
pub struct SuggestNegotiations {
    model: Arc<dyn LanguageModel>,
    retry: RetryPolicy,
}

impl SuggestNegotiations {
    pub fn new(model: Arc<dyn LanguageModel>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    pub async fn run(
        &self,
        input: &SuggestNegotiationsInput,
    ) -> Result<NegotiationSuggestion, FlowError> {
        input.validate()?;
        let prompt = prompt::build_suggest_negotiations_prompt(
            &input.clause_text,
            &input.document_type,
            &input.user_profile,
            &input.jurisdiction,
        );
        run_flow(self.model.as_ref(), &self.retry, "suggestNegotiations", &prompt).await
    }
}
