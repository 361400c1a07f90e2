use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;

use super::models::LeadSubmission;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode lead: {0}")]
    Serialize(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Any 2xx counts as delivered.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

/// Posts the lead as JSON to the webhook.
pub async fn send_lead(url: &str, lead: &LeadSubmission) -> Result<(), SubmitError> {
    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .json(lead)
        .map_err(|e| SubmitError::Serialize(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    check_status(response.status())
}

/// `send_lead` with the outcome logged; the form only needs to know whether it worked.
pub async fn deliver(url: &str, lead: &LeadSubmission) -> bool {
    info!("Submitting lead form to {}", url);
    match send_lead(url, lead).await {
        Ok(()) => {
            info!("Lead delivered");
            true
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hundreds_are_success() {
        assert!(check_status(200).is_ok());
        assert!(check_status(201).is_ok());
        assert!(check_status(204).is_ok());
        assert!(check_status(299).is_ok());
    }

    #[test]
    fn everything_else_is_failure() {
        for status in [0, 199, 301, 400, 404, 500, 503] {
            match check_status(status) {
                Err(SubmitError::Status(s)) => assert_eq!(s, status),
                other => panic!("status {} gave {:?}", status, other),
            }
        }
    }

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(SubmitError::Status(502).to_string(), "webhook responded with status 502");
        assert_eq!(
            SubmitError::Transport("NetworkError".to_string()).to_string(),
            "request failed: NetworkError"
        );
    }
}
