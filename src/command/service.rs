use cf_models::{ServiceInstance, ServiceInstanceSummary, Warnings};
use clap::{builder::NonEmptyStringValueParser, Args};

use super::{Config, SharedActor};
use crate::error::{handle_error, ActionError, CommandError};
use crate::format::{service_instance_summary_rows, KEY_VALUE_PADDING};
use crate::ui::Ui;

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ServiceArgs {
    /// Service instance name
    #[arg(value_name = "SERVICE_INSTANCE", value_parser = NonEmptyStringValueParser::new())]
    pub service_instance: String,

    /// Retrieve and display the given service's guid. All other output for the service is suppressed.
    #[arg(long)]
    pub guid: bool,
}

/// Lookups the `service` command needs from the backend.
///
/// Warnings come back whether or not the lookup succeeded.
pub trait ServiceActor {
    fn get_service_instance_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> (Result<ServiceInstance, ActionError>, Warnings);

    fn get_service_instance_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> (Result<ServiceInstanceSummary, ActionError>, Warnings);
}

pub struct ServiceCommand<U, C, S, A> {
    pub args: ServiceArgs,
    pub ui: U,
    pub config: C,
    pub shared_actor: S,
    pub actor: A,
}

impl<U, C, S, A> ServiceCommand<U, C, S, A>
where
    U: Ui,
    C: Config,
    S: SharedActor,
    A: ServiceActor,
{
    pub fn new(args: ServiceArgs, ui: U, config: C, shared_actor: S, actor: A) -> Self {
        Self {
            args,
            ui,
            config,
            shared_actor,
            actor,
        }
    }

    pub fn execute(&mut self) -> Result<(), CommandError> {
        self.shared_actor
            .check_target(true, true)
            .map_err(|err| handle_error(err, self.config.binary_name()))?;

        let user = self.config.current_user()?;

        let status = format!(
            "Showing info of service {} in org {} / space {} as {}...",
            self.args.service_instance,
            self.config.targeted_organization().name,
            self.config.targeted_space().name,
            user.name,
        );
        self.ui.display_text(&status)?;
        self.ui.display_newline()?;

        tracing::debug!(
            service_instance = %self.args.service_instance,
            space_guid = %self.config.targeted_space().guid,
            guid_only = self.args.guid,
            "looking up service instance"
        );

        if self.args.guid {
            self.display_service_instance_guid()
        } else {
            self.display_service_instance_summary()
        }
    }

    fn display_service_instance_guid(&mut self) -> Result<(), CommandError> {
        let (result, warnings) = self.actor.get_service_instance_by_name_and_space(
            &self.args.service_instance,
            &self.config.targeted_space().guid,
        );
        self.ui.display_warnings(&warnings)?;

        let service_instance =
            result.map_err(|err| handle_error(err, self.config.binary_name()))?;
        self.ui.display_text(&service_instance.guid)?;

        Ok(())
    }

    fn display_service_instance_summary(&mut self) -> Result<(), CommandError> {
        let (result, warnings) = self.actor.get_service_instance_summary_by_name_and_space(
            &self.args.service_instance,
            &self.config.targeted_space().guid,
        );
        self.ui.display_warnings(&warnings)?;

        let summary = result.map_err(|err| handle_error(err, self.config.binary_name()))?;
        let rows = service_instance_summary_rows(&summary);
        self.ui.display_key_value_table("", &rows, KEY_VALUE_PADDING)?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
