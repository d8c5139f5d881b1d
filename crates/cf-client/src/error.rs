use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Get \"{url}\": {message}")]
    Request { url: String, message: String },

    #[error("Invalid auth token: {description}")]
    InvalidAuthToken { description: String },

    #[error("Unauthorized: {description}")]
    Unauthorized { description: String },

    #[error("Forbidden: {description}")]
    Forbidden { description: String },

    #[error("Resource not found: {description}")]
    ResourceNotFound { description: String },

    #[error("Unexpected response from {url} (HTTP {status}): {description}")]
    UnexpectedResponse {
        url: String,
        status: u16,
        error_code: String,
        description: String,
    },

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Error document returned by the Cloud Controller on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: u64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    error_code: String,
}

const INVALID_AUTH_TOKEN_CODE: u64 = 1000;

impl ClientError {
    /// Classify a non-2xx response by status and Cloud Controller error body.
    pub fn from_status(url: &str, status: u16, body: &str) -> Self {
        let error = serde_json::from_str::<ErrorBody>(body).unwrap_or_else(|_| ErrorBody {
            description: body.trim().to_string(),
            ..Default::default()
        });

        match status {
            401 if error.code == INVALID_AUTH_TOKEN_CODE
                || error.error_code == "CF-InvalidAuthToken" =>
            {
                ClientError::InvalidAuthToken {
                    description: error.description,
                }
            }
            401 => ClientError::Unauthorized {
                description: error.description,
            },
            403 => ClientError::Forbidden {
                description: error.description,
            },
            404 => ClientError::ResourceNotFound {
                description: error.description,
            },
            _ => ClientError::UnexpectedResponse {
                url: url.to_string(),
                status,
                error_code: error.error_code,
                description: error.description,
            },
        }
    }
}
