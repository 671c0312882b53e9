//! The page's single network operation: POST the user's metrics to the
//! recommendations endpoint and decode the JSON envelope. One attempt,
//! no timeout, no retry.

use std::fmt;

use fitclub_web::{MetricsRequest, PlanData, PlanResponse};
use gloo_net::http::Request;
use log::debug;

use crate::config::GENERIC_PLAN_ERROR;
use crate::utils::{csrf_token, plan_api_url};

/// Everything that can go wrong between submit and a rendered plan.
#[derive(Debug)]
pub enum PlanRequestError {
    /// The server answered `success: false`; the message is shown verbatim.
    Rejected(String),
    /// Connection failure, non-JSON body, or a request that failed to build.
    Transport(gloo_net::Error),
    /// The hosting page did not inject `window.exercisePlanApiUrl`.
    MissingEndpoint,
    /// The hosting page has no `csrfmiddlewaretoken` hidden input.
    MissingCsrfToken,
    /// `success: true` arrived without a `data` payload.
    MalformedResponse,
}

impl fmt::Display for PlanRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanRequestError::Rejected(msg) => write!(f, "Server rejected request: {}", msg),
            PlanRequestError::Transport(err) => write!(f, "Request failed: {}", err),
            PlanRequestError::MissingEndpoint => {
                write!(f, "Exercise plan endpoint URL is not configured on this page")
            }
            PlanRequestError::MissingCsrfToken => {
                write!(f, "CSRF token field is missing from this page")
            }
            PlanRequestError::MalformedResponse => {
                write!(f, "Server reported success but sent no plan data")
            }
        }
    }
}

impl std::error::Error for PlanRequestError {}

impl From<gloo_net::Error> for PlanRequestError {
    fn from(err: gloo_net::Error) -> Self {
        PlanRequestError::Transport(err)
    }
}

impl PlanRequestError {
    /// Map onto the copy shown in the error panel. Server rejections are
    /// trusted verbatim; everything else collapses to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            PlanRequestError::Rejected(msg) => msg.clone(),
            _ => GENERIC_PLAN_ERROR.to_string(),
        }
    }
}

/// Submit the metrics and return the decoded plan payload.
pub async fn request_plan(metrics: &MetricsRequest) -> Result<PlanData, PlanRequestError> {
    let url = plan_api_url().ok_or(PlanRequestError::MissingEndpoint)?;
    let token = csrf_token().ok_or(PlanRequestError::MissingCsrfToken)?;

    debug!("requesting exercise plan from {}", url);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .header("X-CSRFToken", &token)
        .json(metrics)?
        .send()
        .await?;

    let envelope: PlanResponse = response.json().await?;

    if !envelope.success {
        return Err(PlanRequestError::Rejected(
            envelope
                .error
                .unwrap_or_else(|| GENERIC_PLAN_ERROR.to_string()),
        ));
    }
    envelope.data.ok_or(PlanRequestError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_is_shown_verbatim() {
        let err = PlanRequestError::Rejected("Invalid weight".into());
        assert_eq!(err.user_message(), "Invalid weight");
    }

    #[test]
    fn other_failures_collapse_to_generic_copy() {
        assert_eq!(
            PlanRequestError::MissingEndpoint.user_message(),
            GENERIC_PLAN_ERROR
        );
        assert_eq!(
            PlanRequestError::MalformedResponse.user_message(),
            GENERIC_PLAN_ERROR
        );
    }
}
