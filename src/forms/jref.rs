//! Journal reference request stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{is_valid_doi, FieldError, ValidationOutcome};

/// At least one of DOI, journal reference, or report number must be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JrefForm {
    pub doi: Option<String>,
    pub journal_ref: Option<String>,
    pub report_num: Option<String>,
}

impl JrefForm {
    pub fn validate(&self) -> ValidationOutcome {
        let clean = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let doi = clean(&self.doi);
        let journal_ref = clean(&self.journal_ref);
        let report_num = clean(&self.report_num);

        let mut errors = Vec::new();
        if doi.is_none() && journal_ref.is_none() && report_num.is_none() {
            errors.push(FieldError::new(
                "jref",
                "Please provide a DOI, journal reference, or report number.",
            ));
        }
        if let Some(doi) = doi.as_deref() {
            if !is_valid_doi(doi) {
                errors.push(FieldError::new("doi", "Not a recognizable DOI."));
            }
        }
        if errors.is_empty() {
            ValidationOutcome::Valid(vec![SubmissionEvent::SetJournalReference {
                doi,
                journal_ref,
                report_num,
            }])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}
