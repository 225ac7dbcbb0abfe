//! Prompt templates for the six flows. Rendering is literal interpolation of
//! the validated input fields; any "infer if absent" behavior is instructed
//! in prose, not branched in code.

pub fn build_flag_risky_clauses_prompt(
    document_text: &str,
    document_type: &str,
    user_profile: &str,
    jurisdiction: &str,
) -> String {
    format!(
        r#"You are an expert legal analyst AI. Your task is to perform a comprehensive analysis of a legal document.

First, act as an OCR/NER system. Read the document text and split it into a structured list of every individual clause.

For each clause you identify, perform a full analysis and provide the following information:
1. A unique 'id' for the clause (e.g., "clause-1", "clause-2").
2. The full, original text of the clause in the 'clauseText' field.
3. A 'summary' of the clause in plain, easy-to-understand language.
4. A 'riskAssessment' object.
   - If the clause is risky (even low risk), this object must contain: 'isRisky': true, a 'riskScore' ('🟢 Low', '🟡 Medium', or '🔴 High'), and 'rationale'.
   - If a clause is standard and not risky, this object must contain: 'isRisky': false, 'riskScore': '🟢 Low', and a 'rationale' saying "This is a standard and fair clause."
5. A 'standardsComparison' object containing:
   - 'comparison': How the clause stacks up against regional and industry standards for the given document type.
   - 'isStandard': A boolean indicating if the clause is standard.
   - 'rationale': The reasoning for your standards assessment.
6. A 'negotiationSuggestion' object containing:
   - 'negotiationSuggestions': An array of actionable talking points or alternative phrasing to negotiate more favorable terms, tailored to the user's role.
   - 'rationale': An explanation of why these suggestions are beneficial.

Context for Analysis:
- Document Type: {document_type}
- User's Role: {user_profile}
- Jurisdiction: {jurisdiction}

Document Text to Analyze:
{document_text}

IMPORTANT: Your response MUST be a single, valid JSON array containing objects for every clause in the document. Do not include any text, markdown, or formatting before or after the JSON array. Each object in the array must conform to the full schema defined above.
"#
    )
}

pub fn build_summarize_clause_prompt(clause: &str) -> String {
    format!(
        r#"Summarize the following clause into plain language:

{clause}

Respond with a single JSON object: {{"summary": "..."}}. Output ONLY the JSON object, nothing else.
"#
    )
}

pub fn build_compare_to_standards_prompt(
    clause: &str,
    document_type: &str,
    jurisdiction: Option<&str>,
) -> String {
    let jurisdiction_line = match jurisdiction {
        Some(j) => format!("Jurisdiction: {j}"),
        None => {
            "Jurisdiction: not specified — use your best judgement based on the content of the clause."
                .to_string()
        }
    };

    format!(
        r#"You are an expert legal analyst specializing in contract review.

You will compare the given clause to regional and industry standards for the specified document type and jurisdiction.

Clause: {clause}
Document Type: {document_type}
{jurisdiction_line}

Analyze the clause and provide a comparison to regional and industry standards, including whether it is considered standard or not, and a rationale for your analysis.

Consider factors such as deposit amounts, termination notice periods, liability limitations, and other relevant terms.

Respond with a single JSON object: {{"comparison": "...", "isStandard": true|false, "rationale": "..."}}. Output ONLY the JSON object, nothing else.
"#
    )
}

pub fn build_suggest_negotiations_prompt(
    clause_text: &str,
    document_type: &str,
    user_profile: &str,
    jurisdiction: &str,
) -> String {
    format!(
        r#"You are an expert contract negotiator. Based on the contract clause, document type, user profile, and jurisdiction provided, suggest specific negotiation points and explain the rationale behind each suggestion.

Clause Text: {clause_text}
Document Type: {document_type}
User Profile: {user_profile}
Jurisdiction: {jurisdiction}

Provide a list of negotiation suggestions and a rationale explaining why these suggestions are beneficial for the user.

Respond with a single JSON object: {{"negotiationSuggestions": ["..."], "rationale": "..."}}. Output ONLY the JSON object, nothing else.
"#
    )
}

pub fn build_answer_question_prompt(document_text: &str, user_question: &str) -> String {
    format!(
        r#"You are an AI assistant that answers questions about legal documents.

Here is the document text:
{document_text}

Here is the user's question:
{user_question}

Answer the question as accurately and helpfully as possible, referencing specific clauses in the document where relevant.
If you cannot answer the question based on the provided document, state politely that you cannot answer the question. Do not use outside knowledge to answer the question.

Respond with a single JSON object: {{"answer": "..."}}. Output ONLY the JSON object, nothing else.
"#
    )
}

pub fn build_simulate_scenario_prompt(document_text: &str, scenario: &str) -> String {
    format!(
        r#"You are an AI expert in legal document analysis and risk assessment.

You are provided with a document and a hypothetical scenario. Your task is to analyze the document and predict the outcome of the scenario, along with the associated risk level and rationale.

Document:
{document_text}

Scenario:
{scenario}

Consider all relevant clauses in the document and provide a clear and concise explanation of the likely outcome, its risk level, and the rationale behind your assessment. The risk level must be exactly one of '🟢 Low', '🟡 Medium', or '🔴 High'.

Respond with a single JSON object: {{"outcome": "...", "riskLevel": "🟢 Low|🟡 Medium|🔴 High", "rationale": "..."}}. Output ONLY the JSON object, nothing else.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_prompt_embeds_document_and_context() {
        let prompt = build_flag_risky_clauses_prompt(
            "Clause 1. Rent is due monthly.",
            "Rental Agreement",
            "Tenant",
            "Maharashtra",
        );

        assert!(prompt.contains("Clause 1. Rent is due monthly."));
        assert!(prompt.contains("Document Type: Rental Agreement"));
        assert!(prompt.contains("User's Role: Tenant"));
        assert!(prompt.contains("Jurisdiction: Maharashtra"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn standards_prompt_handles_absent_jurisdiction() {
        let with = build_compare_to_standards_prompt("c", "Loan Agreement", Some("Delhi"));
        assert!(with.contains("Jurisdiction: Delhi"));

        let without = build_compare_to_standards_prompt("c", "Loan Agreement", None);
        assert!(without.contains("not specified"));
        assert!(without.contains("best judgement"));
    }

    #[test]
    fn question_prompt_forbids_outside_knowledge() {
        let prompt = build_answer_question_prompt("doc text", "Can rent increase?");
        assert!(prompt.contains("Can rent increase?"));
        assert!(prompt.contains("Do not use outside knowledge"));
    }
}
