use serde::{Deserialize, Serialize};

/// Non-fatal messages returned alongside a query result, in the order received.
pub type Warnings = Vec<String>;

// ============================================================================
// Session Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

// ============================================================================
// Service Instance Types
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceInstanceType {
    #[default]
    #[serde(rename = "managed_service_instance")]
    Managed,
    #[serde(rename = "user_provided_service_instance")]
    UserProvided,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub guid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: ServiceInstanceType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dashboard_url: String,
    #[serde(default)]
    pub service_plan_guid: String,
    #[serde(default)]
    pub space_guid: String,
}

impl ServiceInstance {
    pub fn is_managed(&self) -> bool {
        self.instance_type == ServiceInstanceType::Managed
    }

    pub fn is_user_provided(&self) -> bool {
        self.instance_type == ServiceInstanceType::UserProvided
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePlan {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub service_guid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub guid: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation_url: String,
}

/// A service instance together with its plan, offering and bound apps.
///
/// Plan and service stay empty for user-provided instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstanceSummary {
    pub service_instance: ServiceInstance,
    #[serde(default)]
    pub service_plan: ServicePlan,
    #[serde(default)]
    pub service: Service,
    #[serde(default)]
    pub bound_applications: Vec<String>,
}

impl ServiceInstanceSummary {
    pub fn name(&self) -> &str {
        &self.service_instance.name
    }

    pub fn is_managed(&self) -> bool {
        self.service_instance.is_managed()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBinding {
    pub guid: String,
    pub app_guid: String,
    pub service_instance_guid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub guid: String,
    pub name: String,
}
