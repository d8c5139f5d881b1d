use cf_client::Client;
use cf_models::{
    Application, Service, ServiceBinding, ServiceInstance, ServiceInstanceSummary, ServicePlan,
    Warnings,
};

use crate::command::ServiceActor;
use crate::error::ActionError;

/// The Cloud Controller requests the service lookups are built from.
pub trait CloudControllerClient {
    fn get_space_service_instances(
        &self,
        space_guid: &str,
        name: &str,
    ) -> cf_client::Result<(Vec<ServiceInstance>, Warnings)>;

    fn get_service_plan(&self, guid: &str) -> cf_client::Result<(ServicePlan, Warnings)>;

    fn get_service(&self, guid: &str) -> cf_client::Result<(Service, Warnings)>;

    fn get_service_instance_service_bindings(
        &self,
        guid: &str,
    ) -> cf_client::Result<(Vec<ServiceBinding>, Warnings)>;

    fn get_user_provided_service_instance_service_bindings(
        &self,
        guid: &str,
    ) -> cf_client::Result<(Vec<ServiceBinding>, Warnings)>;

    fn get_application(&self, guid: &str) -> cf_client::Result<(Application, Warnings)>;
}

impl CloudControllerClient for Client {
    fn get_space_service_instances(
        &self,
        space_guid: &str,
        name: &str,
    ) -> cf_client::Result<(Vec<ServiceInstance>, Warnings)> {
        Client::get_space_service_instances(self, space_guid, name)
    }

    fn get_service_plan(&self, guid: &str) -> cf_client::Result<(ServicePlan, Warnings)> {
        Client::get_service_plan(self, guid)
    }

    fn get_service(&self, guid: &str) -> cf_client::Result<(Service, Warnings)> {
        Client::get_service(self, guid)
    }

    fn get_service_instance_service_bindings(
        &self,
        guid: &str,
    ) -> cf_client::Result<(Vec<ServiceBinding>, Warnings)> {
        Client::get_service_instance_service_bindings(self, guid)
    }

    fn get_user_provided_service_instance_service_bindings(
        &self,
        guid: &str,
    ) -> cf_client::Result<(Vec<ServiceBinding>, Warnings)> {
        Client::get_user_provided_service_instance_service_bindings(self, guid)
    }

    fn get_application(&self, guid: &str) -> cf_client::Result<(Application, Warnings)> {
        Client::get_application(self, guid)
    }
}

pub struct CloudControllerActor<C: CloudControllerClient> {
    client: C,
}

impl<C: CloudControllerClient> CloudControllerActor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    fn find_service_instance(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<ServiceInstance, ActionError> {
        let (instances, request_warnings) =
            self.client.get_space_service_instances(space_guid, name)?;
        warnings.extend(request_warnings);

        instances
            .into_iter()
            .next()
            .ok_or_else(|| ActionError::ServiceInstanceNotFound {
                guid: String::new(),
                name: name.to_string(),
            })
    }

    fn summarize_service_instance(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<ServiceInstanceSummary, ActionError> {
        let service_instance = self.find_service_instance(name, space_guid, warnings)?;
        let mut summary = ServiceInstanceSummary {
            service_instance,
            ..Default::default()
        };

        let instance_guid = summary.service_instance.guid.clone();
        let (bindings, request_warnings) = if summary.is_managed() {
            let plan_guid = summary.service_instance.service_plan_guid.clone();
            // Instances whose plan was purged carry no plan GUID
            if !plan_guid.is_empty() {
                let (plan, request_warnings) = self.client.get_service_plan(&plan_guid)?;
                warnings.extend(request_warnings);

                let (service, request_warnings) = self.client.get_service(&plan.service_guid)?;
                warnings.extend(request_warnings);

                summary.service_plan = plan;
                summary.service = service;
            }

            self.client
                .get_service_instance_service_bindings(&instance_guid)?
        } else {
            self.client
                .get_user_provided_service_instance_service_bindings(&instance_guid)?
        };
        warnings.extend(request_warnings);

        tracing::debug!(
            service_instance = %summary.service_instance.name,
            bindings = bindings.len(),
            "resolving bound applications"
        );

        for binding in bindings {
            let (app, request_warnings) = self.client.get_application(&binding.app_guid)?;
            warnings.extend(request_warnings);
            summary.bound_applications.push(app.name);
        }

        Ok(summary)
    }
}

impl<C: CloudControllerClient> ServiceActor for CloudControllerActor<C> {
    fn get_service_instance_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> (Result<ServiceInstance, ActionError>, Warnings) {
        let mut warnings = Warnings::new();
        let result = self.find_service_instance(name, space_guid, &mut warnings);
        (result, warnings)
    }

    fn get_service_instance_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> (Result<ServiceInstanceSummary, ActionError>, Warnings) {
        let mut warnings = Warnings::new();
        let result = self.summarize_service_instance(name, space_guid, &mut warnings);
        (result, warnings)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
