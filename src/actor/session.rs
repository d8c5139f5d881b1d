use crate::command::{Config, SharedActor};
use crate::error::ActionError;

/// Checks that a user is logged in and has targeted what a command needs.
pub struct SessionActor<C: Config> {
    config: C,
}

impl<C: Config> SessionActor<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.config.access_token().is_empty() || !self.config.refresh_token().is_empty()
    }
}

impl<C: Config> SharedActor for SessionActor<C> {
    fn check_target(&self, targeted_org: bool, targeted_space: bool) -> Result<(), ActionError> {
        let binary_name = self.config.binary_name().to_string();

        if !self.is_logged_in() {
            return Err(ActionError::NotLoggedIn { binary_name });
        }

        if targeted_org && !self.config.has_targeted_organization() {
            return Err(ActionError::NoOrganizationTargeted { binary_name });
        }

        if targeted_space && !self.config.has_targeted_space() {
            return Err(ActionError::NoSpaceTargeted { binary_name });
        }

        Ok(())
    }
}
