use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::provider::LanguageModel;
use crate::retry::RetryPolicy;
use crate::{prompt, run_flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeClauseInput {
    pub clause: String,
}

impl SummarizeClauseInput {
    fn validate(&self) -> Result<(), FlowError> {
        if self.clause.trim().is_empty() {
            return Err(FlowError::invalid_input("clause", "must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeClauseOutput {
    pub summary: String,
}

/// Rewrites one clause into plain language.
#[derive(Clone)]
pub struct SummarizeClause {
    model: Arc<dyn LanguageModel>,
    retry: RetryPolicy,
}

impl SummarizeClause {
    pub fn new(model: Arc<dyn LanguageModel>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    pub async fn run(
        &self,
        input: &SummarizeClauseInput,
    ) -> Result<SummarizeClauseOutput, FlowError> {
        input.validate()?;
        let prompt = prompt::build_summarize_clause_prompt(&input.clause);
        run_flow(self.model.as_ref(), &self.retry, "summarizeClause", &prompt).await
    }
}
