// Commands and the collaborator interfaces they are wired with
pub mod service;

pub use service::{ServiceActor, ServiceArgs, ServiceCommand};

use cf_client::Client;
use cf_models::{Organization, Space, User};
use std::time::Duration;

use crate::error::{ActionError, CommandError};

/// Read access to the user's session configuration.
pub trait Config {
    /// Name the tool was invoked as, used in user-facing hints.
    fn binary_name(&self) -> &str;

    /// API endpoint; empty when none has been set.
    fn target(&self) -> &str;

    fn access_token(&self) -> &str;

    fn refresh_token(&self) -> &str;

    fn request_timeout(&self) -> Duration;

    fn targeted_organization(&self) -> &Organization;

    fn targeted_space(&self) -> &Space;

    fn has_targeted_organization(&self) -> bool {
        !self.targeted_organization().guid.is_empty()
    }

    fn has_targeted_space(&self) -> bool {
        !self.targeted_space().guid.is_empty()
    }

    fn current_user(&self) -> anyhow::Result<User>;
}

/// Session checks shared by every command.
pub trait SharedActor {
    fn check_target(&self, targeted_org: bool, targeted_space: bool) -> Result<(), ActionError>;
}

/// Build the Cloud Controller client for the configured target.
pub fn new_clients(config: &dyn Config) -> Result<Client, CommandError> {
    if config.target().is_empty() {
        return Err(CommandError::NoApiSet {
            binary_name: config.binary_name().to_string(),
        });
    }

    Ok(Client::new(
        config.target(),
        config.access_token(),
        config.request_timeout(),
    ))
}
