use crate::validation::Violation;
use thiserror::Error;
use userpanel_domain::ID;
use userpanel_sdk::APIError;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Some fields are invalid: {}", format_violations(.0))]
    Validation(Vec<Violation>),
    /// The request never completed, so nothing can be assumed about the
    /// server side.
    #[error("Could not reach the api. Check the connection and the configured base url")]
    Connectivity(String),
    #[error("{}", remote_message(*.status))]
    Remote { status: u16, body: String },
    #[error("The api returned a response the panel could not understand")]
    MalformedResponse(String),
    #[error("Another operation is already in progress")]
    Busy,
    #[error("No record with id {0} in the current snapshot")]
    UnknownRecord(ID),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn remote_message(status: u16) -> String {
    match status {
        400 => "The api rejected the submitted data. Check the filled in fields".to_string(),
        404 => "The api endpoint was not found. Check the configured base url".to_string(),
        status => format!("The api responded with status {}", status),
    }
}

impl From<APIError> for PanelError {
    fn from(e: APIError) -> Self {
        match e {
            APIError::Network(err) => Self::Connectivity(err.to_string()),
            APIError::UnexpectedStatusCode { status, body } => Self::Remote {
                status: status.as_u16(),
                body,
            },
            APIError::MalformedResponse(err) => Self::MalformedResponse(err.to_string()),
        }
    }
}
