use super::error::AppError;
use super::submission::SubmissionPayload;
use crate::config::Config;

/// Editable state behind the submission form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub text: String,
    /// What the number field currently shows.
    pub max_clusters_input: String,
    /// `max_clusters_input` parsed on every change.
    pub max_clusters: Result<u32, AppError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: Config::PLACEHOLDER_TEXT.to_string(),
            max_clusters_input: Config::DEFAULT_MAX_CLUSTERS.to_string(),
            max_clusters: Ok(Config::DEFAULT_MAX_CLUSTERS),
        }
    }
}

impl FormState {
    /// Replaces the text verbatim. No trimming, no validation.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Records the raw control value and converts it to a cluster count.
    ///
    /// A value that is not a positive integer leaves the form invalid; no
    /// earlier count is carried over.
    pub fn with_max_clusters(&self, raw: &str) -> Self {
        Self {
            max_clusters_input: raw.to_string(),
            max_clusters: parse_max_clusters(raw),
            ..self.clone()
        }
    }

    /// Builds the request body. The text area is not part of the payload.
    pub fn payload(&self) -> Result<SubmissionPayload, AppError> {
        self.max_clusters.clone().map(SubmissionPayload::new)
    }

    pub fn param_error(&self) -> Option<&AppError> {
        self.max_clusters.as_ref().err()
    }
}

fn parse_max_clusters(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(AppError::InvalidParameter(
            "max clusters must be at least 1".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::InvalidParameter(format!(
            "max clusters {raw:?} is not a whole number: {e}"
        ))),
    }
}
