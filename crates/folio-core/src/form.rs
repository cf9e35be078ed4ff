//! Contact form submission policies and status handling.
//!
//! Exactly one policy is attached to a form. `Redirect` rewrites the form's
//! action and lets the browser submit natively. `Relay` takes over: it posts
//! the fields to a mail-relay service and reports the outcome in a status line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const MSG_SENDING: &str = "Sending mission request...";
pub const MSG_SENT: &str = "Mission request sent successfully 🚀";
pub const MSG_FAILED: &str = "Something went wrong. Try again.";

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_REDIRECT_ENDPOINT: &str = "https://formsubmit.co/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FormPolicy {
    Redirect {
        #[serde(default = "default_redirect_endpoint")]
        endpoint: String,
        user: String,
        domain: String,
    },
    Relay {
        service_id: String,
        template_id: String,
        public_key: String,
        #[serde(default = "default_relay_endpoint")]
        endpoint: String,
    },
}

fn default_redirect_endpoint() -> String {
    DEFAULT_REDIRECT_ENDPOINT.to_string()
}

fn default_relay_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_string()
}

impl Default for FormPolicy {
    fn default() -> Self {
        FormPolicy::Relay {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            endpoint: default_relay_endpoint(),
        }
    }
}

/// Destination for the redirect policy: the address is joined from its two
/// fragments at submit time so it never appears whole in the page source.
pub fn assemble_target(endpoint: &str, user: &str, domain: &str) -> String {
    format!("{endpoint}{user}@{domain}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => MSG_SENDING,
            FormStatus::Sent => MSG_SENT,
            FormStatus::Failed => MSG_FAILED,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay rejected the message with HTTP {status}")]
    Rejected { status: u16 },
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("could not encode relay payload: {0}")]
    Encode(String),
}

/// What the page should show once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub status: FormStatus,
    pub clear_fields: bool,
}

/// One submit event under the relay policy. Created per submit, discarded
/// once the status line has been updated; there is no retry or queue.
#[derive(Debug, Default)]
pub struct Submission {
    status: FormStatus,
}

impl Submission {
    /// Start sending. The status becomes `Sending` before any I/O happens.
    pub fn begin() -> Self {
        Self {
            status: FormStatus::Sending,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn resolve(&mut self, outcome: Result<(), RelayError>) -> Resolution {
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Sent;
                Resolution {
                    status: FormStatus::Sent,
                    clear_fields: true,
                }
            }
            Err(e) => {
                log::warn!("[form] send failed: {e}");
                self.status = FormStatus::Failed;
                Resolution {
                    status: FormStatus::Failed,
                    clear_fields: false,
                }
            }
        }
    }
}

/// JSON body accepted by the relay's send endpoint.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: BTreeMap<String, String>,
}

impl<'a> RelayRequest<'a> {
    pub fn new(
        service_id: &'a str,
        template_id: &'a str,
        public_key: &'a str,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            service_id,
            template_id,
            user_id: public_key,
            template_params: fields.into_iter().filter(|(k, _)| !k.is_empty()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, RelayError> {
        serde_json::to_string(self).map_err(|e| RelayError::Encode(e.to_string()))
    }
}

/// Map an HTTP status from the relay into an outcome.
pub fn outcome_for_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Rejected { status })
    }
}
