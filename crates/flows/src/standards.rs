use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::provider::LanguageModel;
use crate::retry::RetryPolicy;
use crate::schema::StandardsComparison;
use crate::{prompt, run_flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareToStandardsInput {
    pub clause: String,
    pub document_type: String,
    /// Optional; when absent the model is told to infer it from the clause.
    #[serde(default)]
    pub jurisdiction: Option<String>,
}

impl CompareToStandardsInput {
    fn validate(&self) -> Result<(), FlowError> {
        if self.clause.trim().is_empty() {
            return Err(FlowError::invalid_input("clause", "must not be empty"));
        }
        if self.document_type.trim().is_empty() {
            return Err(FlowError::invalid_input("documentType", "must not be empty"));
        }
        Ok(())
    }
}

/// Compares one clause to regional and industry standards.
#[derive(Clone)]
pub struct CompareToStandards {
    model: Arc<dyn LanguageModel>,
    retry: RetryPolicy,
}

impl CompareToStandards {
    pub fn new(model: Arc<dyn LanguageModel>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    pub async fn run(
        &self,
        input: &CompareToStandardsInput,
    ) -> Result<StandardsComparison, FlowError> {
        input.validate()?;
        let prompt = prompt::build_compare_to_standards_prompt(
            &input.clause,
            &input.document_type,
            input.jurisdiction.as_deref(),
        );
        run_flow(self.model.as_ref(), &self.retry, "compareToStandards", &prompt).await
    }
}
