use cf_models::ServiceInstanceSummary;

pub const KEY_VALUE_PADDING: u16 = 3;

/// Key/value rows describing a service instance.
///
/// Managed instances always get all eight rows, empty fields included;
/// user-provided instances get name, a fixed service label and bound apps.
pub fn service_instance_summary_rows(summary: &ServiceInstanceSummary) -> Vec<(String, String)> {
    let name = summary.name().to_string();
    let bound_apps = summary.bound_applications.join(", ");

    if summary.is_managed() {
        vec![
            row("name:", name),
            row("service:", summary.service.label.clone()),
            row("bound apps:", bound_apps),
            row("tags:", summary.service_instance.tags.join(", ")),
            row("plan:", summary.service_plan.name.clone()),
            row("description:", summary.service.description.clone()),
            row("documentation:", summary.service.documentation_url.clone()),
            row("dashboard:", summary.service_instance.dashboard_url.clone()),
        ]
    } else {
        vec![
            row("name:", name),
            row("service:", "user-provided".to_string()),
            row("bound apps:", bound_apps),
        ]
    }
}

fn row(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}
