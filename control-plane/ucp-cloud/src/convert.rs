use chrono::{DateTime, Utc};
use ucp_models::{
    CloudControlPlaneResponse, ConfigurationStatus, ControlPlaneResponse,
    ControlPlaneStatus,
};

/// Converts an API response into its presentation form, measuring age
/// against the current wall clock.
pub fn convert(resp: &CloudControlPlaneResponse) -> ControlPlaneResponse {
    convert_at(resp, Utc::now())
}

pub fn convert_at(
    resp: &CloudControlPlaneResponse,
    now: DateTime<Utc>,
) -> ControlPlaneResponse {
    let ctp = &resp.control_plane;

    let (cfg_name, cfg_status) = match &ctp.configuration {
        Some(cfg) => (cfg.name.clone().unwrap_or_default(), cfg.status.clone()),
        None => (String::new(), ConfigurationStatus::default()),
    };

    ControlPlaneResponse {
        id: ctp.id.to_string(),
        name: ctp.name.clone(),
        synced: to_bool(true),
        ready: to_bool(resp.status == ControlPlaneStatus::Ready),
        message: to_message(resp.status).to_string(),
        cfg: cfg_name,
        updated: format_status(&cfg_status),
        age: ctp.created_at.map(|created| now - created),
    }
}

fn format_status(status: &ConfigurationStatus) -> String {
    if status.is_empty() {
        String::new()
    } else if status.is_ready() {
        "True".to_string()
    } else {
        capitalize(status.as_str())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn to_message(status: ControlPlaneStatus) -> &'static str {
    match status {
        ControlPlaneStatus::Provisioning => "Controlplane is being created",
        ControlPlaneStatus::Updating => "Controlplane is being updated",
        ControlPlaneStatus::Deleting => "Controlplane is being deleted",
        _ => "",
    }
}

fn to_bool(b: bool) -> String {
    let s = if b { "True" } else { "False" };
    s.to_string()
}
