// Cloud Controller v2 resource envelopes and their conversion into cf-models records
use cf_models::{
    Application, Service, ServiceBinding, ServiceInstance, ServiceInstanceType, ServicePlan,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Metadata {
    pub guid: String,
}

#[derive(Debug, Deserialize)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct PaginatedResources<E> {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource<E>>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceInstanceEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: ServiceInstanceType,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub service_plan_guid: Option<String>,
    #[serde(default)]
    pub space_guid: String,
}

#[derive(Debug, Deserialize)]
pub struct ServicePlanEntity {
    pub name: String,
    #[serde(default)]
    pub service_guid: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceEntity {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceBindingEntity {
    pub app_guid: String,
    #[serde(default)]
    pub service_instance_guid: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationEntity {
    pub name: String,
}

impl From<Resource<ServiceInstanceEntity>> for ServiceInstance {
    fn from(resource: Resource<ServiceInstanceEntity>) -> Self {
        let entity = resource.entity;
        ServiceInstance {
            guid: resource.metadata.guid,
            name: entity.name,
            instance_type: entity.instance_type,
            tags: entity.tags.unwrap_or_default(),
            dashboard_url: entity.dashboard_url.unwrap_or_default(),
            service_plan_guid: entity.service_plan_guid.unwrap_or_default(),
            space_guid: entity.space_guid,
        }
    }
}

impl From<Resource<ServicePlanEntity>> for ServicePlan {
    fn from(resource: Resource<ServicePlanEntity>) -> Self {
        ServicePlan {
            guid: resource.metadata.guid,
            name: resource.entity.name,
            service_guid: resource.entity.service_guid,
        }
    }
}

impl From<Resource<ServiceEntity>> for Service {
    fn from(resource: Resource<ServiceEntity>) -> Self {
        Service {
            guid: resource.metadata.guid,
            label: resource.entity.label,
            description: resource.entity.description.unwrap_or_default(),
            documentation_url: resource.entity.documentation_url.unwrap_or_default(),
        }
    }
}

impl From<Resource<ServiceBindingEntity>> for ServiceBinding {
    fn from(resource: Resource<ServiceBindingEntity>) -> Self {
        ServiceBinding {
            guid: resource.metadata.guid,
            app_guid: resource.entity.app_guid,
            service_instance_guid: resource.entity.service_instance_guid,
        }
    }
}

impl From<Resource<ApplicationEntity>> for Application {
    fn from(resource: Resource<ApplicationEntity>) -> Self {
        Application {
            guid: resource.metadata.guid,
            name: resource.entity.name,
        }
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod resources_tests;
