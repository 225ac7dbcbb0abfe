use std::sync::Arc;

use flows::{
    AnswerUserQuestion, AnswerUserQuestionInput, AnswerUserQuestionOutput, FlagRiskyClauses,
    FlagRiskyClausesInput, LanguageModel, RetryPolicy, SimulateScenario, SimulateScenarioInput,
    SimulateScenarioOutput,
};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::document::{generate_doc_id, Document, DocumentType, UserProfile};
use crate::error::SessionError;
use crate::extractor::Extractor;
use crate::session::{Session, SessionState, SessionView};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_data_uri: String,
    pub document_type: DocumentType,
    pub user_profile: UserProfile,
    pub jurisdiction: String,
}

/// Sequences extraction and analysis over the one in-memory session, and
/// runs the two side panels against it.
///
/// The session lock is released while model calls are in flight, so the Q&A
/// and Scenario panels can be active concurrently; each writes back only its
/// own slot. There is no cancellation: a request the caller abandoned still
/// runs to completion and its result lands in the slot.
pub struct Orchestrator {
    extractor: Arc<dyn Extractor>,
    flag_clauses: FlagRiskyClauses,
    answer_question: AnswerUserQuestion,
    simulate_scenario: SimulateScenario,
    session: Mutex<Session>,
}

impl Orchestrator {
    pub fn new(
        extractor: Arc<dyn Extractor>,
        model: Arc<dyn LanguageModel>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            extractor,
            flag_clauses: FlagRiskyClauses::new(model.clone(), retry.clone()),
            answer_question: AnswerUserQuestion::new(model.clone(), retry.clone()),
            simulate_scenario: SimulateScenario::new(model, retry),
            session: Mutex::new(Session::new()),
        }
    }

    /// Empty → Extracting → Analyzing → Ready. Any failure on the way puts
    /// the session back to Empty with no partial clause list retained.
    pub async fn analyze(&self, upload: UploadRequest) -> Result<SessionView, SessionError> {
        {
            let mut session = self.session.lock().await;
            if matches!(
                session.state,
                SessionState::Extracting | SessionState::Analyzing
            ) {
                return Err(SessionError::Busy);
            }
            session.reset();
            session.state = SessionState::Extracting;
        }

        let result = self.run_pipeline(&upload).await;

        let mut session = self.session.lock().await;
        match result {
            Ok((document, clauses)) => {
                tracing::info!(
                    doc_id = %document.doc_id,
                    clauses = clauses.len(),
                    "document analysis complete"
                );
                session.document = Some(document);
                session.store_clauses(clauses);
                Ok(session.view())
            }
            Err(e) => {
                tracing::warn!(error = %e, "document analysis failed");
                session.reset();
                Err(e)
            }
        }
    }

    async fn run_pipeline(
        &self,
        upload: &UploadRequest,
    ) -> Result<(Document, Vec<flows::ClauseAnalysis>), SessionError> {
        let text = self.extractor.extract(&upload.file_data_uri).await?;

        let document = Document {
            doc_id: generate_doc_id(&upload.file_data_uri),
            text,
            document_type: upload.document_type,
            user_profile: upload.user_profile,
            jurisdiction: upload.jurisdiction.clone(),
        };

        {
            let mut session = self.session.lock().await;
            session.state = SessionState::Analyzing;
        }

        let input = FlagRiskyClausesInput {
            document_text: document.text.clone(),
            document_type: document.document_type.label().to_string(),
            user_profile: document.user_profile.label().to_string(),
            jurisdiction: document.jurisdiction.clone(),
        };
        let clauses = self.flag_clauses.run(&input).await?;

        Ok((document, clauses))
    }

    /// Q&A side request. Does not change the main state; failures land in
    /// the panel slot and the session stays Ready.
    pub async fn ask(&self, question: &str) -> Result<AnswerUserQuestionOutput, SessionError> {
        let document_text = self.begin_panel(|session| &mut session.qa).await?;

        let result = self
            .answer_question
            .run(&AnswerUserQuestionInput {
                document_text,
                user_question: question.to_string(),
            })
            .await;

        let mut session = self.session.lock().await;
        match result {
            Ok(output) => {
                session.qa.finish_ok(output.clone());
                Ok(output)
            }
            Err(e) => {
                session.qa.finish_err(e.to_string());
                Err(SessionError::Flow(e))
            }
        }
    }

    /// Scenario side request, same contract as [`ask`](Self::ask).
    pub async fn simulate(&self, scenario: &str) -> Result<SimulateScenarioOutput, SessionError> {
        let document_text = self.begin_panel(|session| &mut session.scenario).await?;

        let result = self
            .simulate_scenario
            .run(&SimulateScenarioInput {
                document_text,
                scenario: scenario.to_string(),
            })
            .await;

        let mut session = self.session.lock().await;
        match result {
            Ok(output) => {
                session.scenario.finish_ok(output.clone());
                Ok(output)
            }
            Err(e) => {
                session.scenario.finish_err(e.to_string());
                Err(SessionError::Flow(e))
            }
        }
    }

    /// Mark a panel busy and hand back the document text, or refuse when
    /// there is no Ready document or the panel is already running.
    async fn begin_panel<T, F>(&self, slot: F) -> Result<String, SessionError>
    where
        F: FnOnce(&mut Session) -> &mut crate::session::PanelSlot<T>,
    {
        let mut session = self.session.lock().await;
        let text = match (session.state, &session.document) {
            (SessionState::Ready, Some(document)) => document.text.clone(),
            _ => return Err(SessionError::NoDocument),
        };

        let slot = slot(&mut session);
        if slot.busy {
            return Err(SessionError::Busy);
        }
        slot.begin();
        Ok(text)
    }

    pub async fn reset(&self) -> SessionView {
        let mut session = self.session.lock().await;
        session.reset();
        session.view()
    }

    pub async fn view(&self) -> SessionView {
        self.session.lock().await.view()
    }
}
