use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Rental,
    Loan,
    Service,
    Tos,
}

impl DocumentType {
    /// Human-readable name used inside prompts.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Rental => "Rental Agreement",
            DocumentType::Loan => "Loan Agreement",
            DocumentType::Service => "Service Agreement",
            DocumentType::Tos => "Terms of Service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserProfile {
    Tenant,
    Freelancer,
    BusinessOwner,
    Consumer,
}

impl UserProfile {
    pub fn label(&self) -> &'static str {
        match self {
            UserProfile::Tenant => "Tenant",
            UserProfile::Freelancer => "Freelancer",
            UserProfile::BusinessOwner => "Small Business Owner",
            UserProfile::Consumer => "Consumer",
        }
    }
}

/// The analyzed document. Created once per upload, owned by the session,
/// discarded on reset; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub doc_id: String,
    pub text: String,
    pub document_type: DocumentType,
    pub user_profile: UserProfile,
    pub jurisdiction: String,
}

/// Stable document id derived from the uploaded payload.
pub fn generate_doc_id(file_data_uri: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(file_data_uri.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..16])
}
