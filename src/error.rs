use cf_client::ClientError;
use thiserror::Error;

/// Failures raised by the actors, before any user-facing translation.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("not logged in")]
    NotLoggedIn { binary_name: String },

    #[error("no organization targeted")]
    NoOrganizationTargeted { binary_name: String },

    #[error("no space targeted")]
    NoSpaceTargeted { binary_name: String },

    #[error("service instance '{name}' not found")]
    ServiceInstanceNotFound { guid: String, name: String },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors returned by a command, carrying the text shown to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("No API endpoint set. Use '{binary_name} login' or '{binary_name} api' to target an endpoint.")]
    NoApiSet { binary_name: String },

    #[error("Not logged in. Use '{binary_name} login' to log in.")]
    NotLoggedIn { binary_name: String },

    #[error("No org targeted, use '{binary_name} target -o ORG' to target an org.")]
    NoOrganizationTargeted { binary_name: String },

    #[error("No space targeted, use '{binary_name} target -s SPACE' to target a space.")]
    NoSpaceTargeted { binary_name: String },

    #[error("Service instance {name} not found.")]
    ServiceInstanceNotFound { guid: String, name: String },

    #[error("Request error: {message}\nTIP: If you are behind a firewall and require an HTTP proxy, verify the https_proxy environment variable is correctly set. Else, check your network connection.")]
    ApiRequest { message: String },

    #[error("Invalid auth token. Use '{binary_name} login' to log in again.")]
    InvalidAuthToken { binary_name: String },

    #[error(transparent)]
    Unhandled(ActionError),

    #[error(transparent)]
    Raw(#[from] anyhow::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Translate an actor failure into the error reported to the user.
///
/// Errors without a user-facing form pass through unchanged.
pub fn handle_error(err: ActionError, binary_name: &str) -> CommandError {
    match err {
        ActionError::NotLoggedIn { binary_name } => CommandError::NotLoggedIn { binary_name },
        ActionError::NoOrganizationTargeted { binary_name } => {
            CommandError::NoOrganizationTargeted { binary_name }
        }
        ActionError::NoSpaceTargeted { binary_name } => CommandError::NoSpaceTargeted { binary_name },
        ActionError::ServiceInstanceNotFound { guid, name } => {
            CommandError::ServiceInstanceNotFound { guid, name }
        }
        ActionError::Client(ClientError::Request { url, message }) => CommandError::ApiRequest {
            message: format!("Get \"{}\": {}", url, message),
        },
        ActionError::Client(ClientError::InvalidAuthToken { description }) => {
            tracing::debug!(%description, "access token rejected");
            CommandError::InvalidAuthToken {
                binary_name: binary_name.to_string(),
            }
        }
        other => CommandError::Unhandled(other),
    }
}
