//! Read-only Cloud Controller v2 queries used by the `service` command.
//!
//! Every call returns the decoded records together with the warnings the
//! Cloud Controller attached through the `X-Cf-Warnings` header.

pub mod error;
pub mod resources;

pub use error::{ClientError, Result};

use cf_models::{
    Application, Service, ServiceBinding, ServiceInstance, ServicePlan, Warnings,
};
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::form_urlencoded;

use resources::{
    ApplicationEntity, PaginatedResources, Resource, ServiceBindingEntity, ServiceEntity,
    ServiceInstanceEntity, ServicePlanEntity,
};

const WARNINGS_HEADER: &str = "X-Cf-Warnings";

#[derive(Clone)]
pub struct Client {
    api_endpoint: String,
    access_token: String,
    agent: ureq::Agent,
}

impl Client {
    pub fn new(api_endpoint: &str, access_token: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            agent,
        }
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// List service instances (managed and user-provided) named `name` in a space
    pub fn get_space_service_instances(
        &self,
        space_guid: &str,
        name: &str,
    ) -> Result<(Vec<ServiceInstance>, Warnings)> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &format!("name:{}", name))
            .append_pair("return_user_provided_service_instances", "true")
            .finish();
        let path = format!("/v2/spaces/{}/service_instances?{}", space_guid, query);

        self.get_paged::<ServiceInstanceEntity, ServiceInstance>(&path)
    }

    pub fn get_service_plan(&self, guid: &str) -> Result<(ServicePlan, Warnings)> {
        let path = format!("/v2/service_plans/{}", guid);
        let (resource, warnings) = self.get::<Resource<ServicePlanEntity>>(&path)?;
        Ok((resource.into(), warnings))
    }

    pub fn get_service(&self, guid: &str) -> Result<(Service, Warnings)> {
        let path = format!("/v2/services/{}", guid);
        let (resource, warnings) = self.get::<Resource<ServiceEntity>>(&path)?;
        Ok((resource.into(), warnings))
    }

    /// Bindings of a managed service instance
    pub fn get_service_instance_service_bindings(
        &self,
        guid: &str,
    ) -> Result<(Vec<ServiceBinding>, Warnings)> {
        let path = format!("/v2/service_instances/{}/service_bindings", guid);
        self.get_paged::<ServiceBindingEntity, ServiceBinding>(&path)
    }

    /// Bindings of a user-provided service instance
    pub fn get_user_provided_service_instance_service_bindings(
        &self,
        guid: &str,
    ) -> Result<(Vec<ServiceBinding>, Warnings)> {
        let path = format!("/v2/user_provided_service_instances/{}/service_bindings", guid);
        self.get_paged::<ServiceBindingEntity, ServiceBinding>(&path)
    }

    pub fn get_application(&self, guid: &str) -> Result<(Application, Warnings)> {
        let path = format!("/v2/apps/{}", guid);
        let (resource, warnings) = self.get::<Resource<ApplicationEntity>>(&path)?;
        Ok((resource.into(), warnings))
    }

    /// Follow `next_url` until the last page, keeping warnings from every page.
    fn get_paged<E, T>(&self, first_path: &str) -> Result<(Vec<T>, Warnings)>
    where
        E: DeserializeOwned,
        T: From<Resource<E>>,
    {
        let mut records = Vec::new();
        let mut warnings = Warnings::new();
        let mut next = Some(first_path.to_string());

        while let Some(path) = next {
            let (page, page_warnings) = self.get::<PaginatedResources<E>>(&path)?;
            warnings.extend(page_warnings);
            records.extend(page.resources.into_iter().map(T::from));
            next = page.next_url;
        }

        Ok((records, warnings))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<(T, Warnings)> {
        let url = format!("{}{}", self.api_endpoint, path);
        tracing::debug!(method = "GET", %url, "cloud controller request");

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &self.access_token)
            .set("Accept", "application/json")
            .call();

        match response {
            Ok(response) => {
                tracing::debug!(status = response.status(), %url, "cloud controller response");
                let warnings = parse_warnings(response.header(WARNINGS_HEADER));
                let body = response.into_string()?;
                let value = serde_json::from_str(&body)?;
                Ok((value, warnings))
            }
            Err(ureq::Error::Status(status, response)) => {
                tracing::debug!(status, %url, "cloud controller error response");
                let body = response.into_string().unwrap_or_default();
                Err(ClientError::from_status(&url, status, &body))
            }
            Err(ureq::Error::Transport(transport)) => Err(ClientError::Request {
                url,
                message: transport.to_string(),
            }),
        }
    }
}

/// Decode the comma-separated, query-escaped `X-Cf-Warnings` header.
pub fn parse_warnings(header: Option<&str>) -> Warnings {
    let Some(header) = header else {
        return Warnings::new();
    };

    header
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let entry = entry.replace('+', " ");
            percent_decode_str(&entry).decode_utf8_lossy().into_owned()
        })
        .filter(|warning| !warning.is_empty())
        .collect()
}
