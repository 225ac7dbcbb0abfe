use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::provider::LanguageModel;
use crate::retry::RetryPolicy;
use crate::{prompt, run_flow};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerUserQuestionInput {
    pub document_text: String,
    pub user_question: String,
}

impl AnswerUserQuestionInput {
    fn validate(&self) -> Result<(), FlowError> {
        if self.document_text.trim().is_empty() {
            return Err(FlowError::invalid_input("documentText", "must not be empty"));
        }
        if self.user_question.trim().is_empty() {
            return Err(FlowError::invalid_input("userQuestion", "must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerUserQuestionOutput {
    pub answer: String,
}

/// Answers a free-form question strictly from the document text; the prompt
/// instructs the model to refuse politely when the document does not contain
/// the answer.
#[derive(Clone)]
pub struct AnswerUserQuestion {
    model: Arc<dyn LanguageModel>,
    retry: RetryPolicy,
}

impl AnswerUserQuestion {
    pub fn new(model: Arc<dyn LanguageModel>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    pub async fn run(
        &self,
        input: &AnswerUserQuestionInput,
    ) -> Result<AnswerUserQuestionOutput, FlowError> {
        input.validate()?;
        let prompt =
            prompt::build_answer_question_prompt(&input.document_text, &input.user_question);
        run_flow(self.model.as_ref(), &self.retry, "answerUserQuestion", &prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubModel;

    #[tokio::test]
    async fn returns_the_answer_verbatim() {
        let flow = AnswerUserQuestion::new(
            Arc::new(StubModel::new(r#"{"answer": "No"}"#)),
            RetryPolicy::default(),
        );

        let output = flow
            .run(&AnswerUserQuestionInput {
                document_text: "Rent is fixed for the full term.".to_string(),
                user_question: "Can rent increase?".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.answer, "No");
    }

    #[tokio::test]
    async fn empty_question_names_the_field() {
        let flow = AnswerUserQuestion::new(
            Arc::new(StubModel::new("{}")),
            RetryPolicy::default(),
        );

        let err = flow
            .run(&AnswerUserQuestionInput {
                document_text: "text".to_string(),
                user_question: "  ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FlowError::InvalidInput { field: "userQuestion", .. }
        ));
    }
}
