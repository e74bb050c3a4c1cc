//! Core and optional metadata stages.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{check_length, is_valid_doi, FieldError, ValidationOutcome};

/// Required metadata: title, abstract, and author display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataForm {
    pub title: String,
    pub abstract_text: String,
    pub authors_display: String,
    pub comments: Option<String>,
}

impl MetadataForm {
    pub fn validate(&self) -> ValidationOutcome {
        let mut errors = Vec::new();
        check_length(&mut errors, "title", &self.title, 6, 255);
        check_length(&mut errors, "abstract", &self.abstract_text, 6, 1920);
        check_length(&mut errors, "authors", &self.authors_display, 6, 1024);
        if errors.is_empty() {
            ValidationOutcome::Valid(vec![SubmissionEvent::SetCoreMetadata {
                title: self.title.trim().to_string(),
                abstract_text: self.abstract_text.trim().to_string(),
                authors_display: self.authors_display.trim().to_string(),
                comments: self
                    .comments
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
            }])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}

/// Optional identifiers and classifications; everything may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalMetadataForm {
    pub doi: Option<String>,
    pub journal_ref: Option<String>,
    pub report_num: Option<String>,
    pub acm_class: Option<String>,
    pub msc_class: Option<String>,
}

impl OptionalMetadataForm {
    pub fn validate(&self) -> ValidationOutcome {
        let mut errors = Vec::new();
        if let Some(doi) = self.doi.as_deref().filter(|d| !d.is_empty()) {
            if !is_valid_doi(doi) {
                errors.push(FieldError::new("doi", "Not a recognizable DOI."));
            }
        }
        if let Some(journal_ref) = self.journal_ref.as_deref() {
            check_length(&mut errors, "journal_ref", journal_ref, 1, 255);
        }
        if let Some(report_num) = self.report_num.as_deref() {
            check_length(&mut errors, "report_num", report_num, 1, 255);
        }
        if errors.is_empty() {
            let clean = |value: &Option<String>| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            ValidationOutcome::Valid(vec![SubmissionEvent::SetOptionalMetadata {
                doi: clean(&self.doi),
                journal_ref: clean(&self.journal_ref),
                report_num: clean(&self.report_num),
                acm_class: clean(&self.acm_class),
                msc_class: clean(&self.msc_class),
            }])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}
