use std::io::Cursor;
use std::sync::Arc;

use ai::{
    chat_completions::{ChatCompletion, ChatCompletionMessage, ChatCompletionRequestBuilder},
    clients::openai::Client,
};
use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, prelude::Result};

/// The six job-posting fields extracted from a company's registration form.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JobPostingFields {
    pub job_roles: Option<String>,
    pub package_offered: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub bond_details: Option<String>,
    pub job_location: Option<String>,
    pub selection_process: Option<String>,
}

pub fn extract_pdf_text(data: &[u8]) -> Result<String> {
    use lopdf::Document;
    let cursor = Cursor::new(data);
    let doc = Document::load_from(cursor)
        .map_err(|e| StandardError::new("ERR-EXTRACT-003").interpolate_err(e.to_string()))?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push(' ');
            }
            Err(e) => {
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }

    if text.trim().is_empty() {
        return Err(StandardError::new("ERR-EXTRACT-003")
            .interpolate_err("no text extracted from PDF".to_string()));
    }
    Ok(text.trim().to_string())
}

/// Model output is expected to be a single JSON object; tolerate the usual
/// markdown fencing around it.
pub fn parse_extraction(raw: &str) -> Result<JobPostingFields> {
    let trimmed = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(trimmed)
        .map_err(|e| StandardError::new("ERR-EXTRACT-005").interpolate_err(e.to_string()))
}

const EXTRACTION_PROMPT: &str = "You are a data extraction assistant. Extract placement/job-related \
information from the company registration form text below. Extract these fields if present:\n\
- job_roles: job titles/positions offered (comma-separated)\n\
- package_offered: salary/CTC details\n\
- eligibility_criteria: academic requirements (CGPA, branches, backlogs, etc.)\n\
- bond_details: any service agreement or bond requirements\n\
- job_location: work locations\n\
- selection_process: hiring process steps\n\
Return ONLY a valid JSON object with these exact field names. Use null for fields not found.";

#[async_trait::async_trait]
pub trait ExtractOps {
    async fn extract_job_fields(&self, form_text: &str) -> Result<JobPostingFields>;
}

#[async_trait::async_trait]
impl ExtractOps for Arc<Client> {
    async fn extract_job_fields(&self, form_text: &str) -> Result<JobPostingFields> {
        let prompt = format!("{}\n\nForm text:\n{}", EXTRACTION_PROMPT, form_text);
        let request = ChatCompletionRequestBuilder::default()
            .model(&settings.ai_model)
            .messages(vec![ChatCompletionMessage::User(prompt.into())])
            .build()
            .map_err(|e| StandardError::new("ERR-EXTRACT-004").interpolate_err(e.to_string()))?;
        let response = self
            .chat_completions(&request)
            .await
            .map_err(|e| StandardError::new("ERR-EXTRACT-004").interpolate_err(e.to_string()))?;
        let answer = response.choices[0]
            .message
            .content
            .as_ref()
            .ok_or_else(|| {
                StandardError::new("ERR-EXTRACT-004")
                    .interpolate_err("model returned no content".to_string())
            })?
            .clone();
        parse_extraction(&answer)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn parses_plain_json_output() {
        let fields = parse_extraction(
            r#"{"job_roles": "SDE, QA", "package_offered": "12 LPA",
                "eligibility_criteria": null, "bond_details": null,
                "job_location": "Pune", "selection_process": null}"#,
        )
        .unwrap();
        assert_eq!(fields.job_roles.as_deref(), Some("SDE, QA"));
        assert_eq!(fields.job_location.as_deref(), Some("Pune"));
        assert!(fields.bond_details.is_none());
    }

    #[test]
    fn parses_fenced_json_output() {
        let fields = parse_extraction(
            "```json\n{\"job_roles\": \"Analyst\", \"package_offered\": null, \
             \"eligibility_criteria\": \"7.0 CGPA\", \"bond_details\": null, \
             \"job_location\": null, \"selection_process\": \"OA + interview\"}\n```",
        )
        .unwrap();
        assert_eq!(fields.job_roles.as_deref(), Some("Analyst"));
        assert_eq!(fields.selection_process.as_deref(), Some("OA + interview"));
    }

    #[test]
    fn garbage_output_is_an_error() {
        assert!(parse_extraction("sorry, I could not read that").is_err());
    }
}
