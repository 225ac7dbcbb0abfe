//! One in-memory document session and the orchestrator that drives it
//! through Empty → Extracting → Analyzing → Ready.

pub mod document;
pub mod error;
pub mod extractor;
pub mod orchestrator;
pub mod session;

pub use document::{generate_doc_id, Document, DocumentType, UserProfile};
pub use error::SessionError;
pub use extractor::{DocumentExtractor, Extractor};
pub use orchestrator::{Orchestrator, UploadRequest};
pub use session::{PanelSlot, Session, SessionState, SessionView};
