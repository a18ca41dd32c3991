use crate::permission::*;
use crate::permission_db::*;
use anyhow::Context;
use dashmap::DashMap;
use lazy_static::lazy_static;
use tracing::{info, trace, warn};

#[derive(Debug, Clone)]
pub struct ClassifiedPermission {
    pub risk: PermissionRisk,
    // Membership in the dangerous class, used for app ranking.
    // Not the same thing as the Critical display tier.
    pub critical_class: bool,
    pub group: Option<String>,
    pub description: Option<String>,
}

fn class_to_risk(class: &str) -> PermissionRisk {
    match class {
        "critical" => PermissionRisk::Critical,
        "dangerous" => PermissionRisk::High,
        "sensitive" => PermissionRisk::Medium,
        other => {
            warn!("Unknown permission class in builtin database: {}", other);
            PermissionRisk::Low
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

lazy_static! {
    pub static ref PERMISSIONS: DashMap<String, ClassifiedPermission> = {
        info!("Loading permission classification database from JSON");

        let perm_info: PermissionInfoListJSON = serde_json::from_str(PERMISSION_RISK_DB)
            .with_context(|| "Failed to parse JSON data")
            .expect("Failed to initialize builtin permission database");

        let permissions: DashMap<String, ClassifiedPermission> = DashMap::new();

        // A permission can appear under several classes. Keep the highest
        // tier and the richest group/description, never downgrade.
        for entry in perm_info.permissions {
            let risk = class_to_risk(&entry.class);
            let critical_class = entry.class == "dangerous";
            let mut classified =
                permissions
                    .entry(entry.name)
                    .or_insert_with(|| ClassifiedPermission {
                        risk: PermissionRisk::Low,
                        critical_class: false,
                        group: None,
                        description: None,
                    });
            if risk > classified.risk {
                classified.risk = risk;
            }
            classified.critical_class = classified.critical_class || critical_class;
            if classified.group.is_none() {
                classified.group = non_empty(&entry.group);
            }
            if classified.description.is_none() {
                classified.description = non_empty(&entry.description);
            }
        }

        info!("Loaded {} classified permissions", permissions.len());

        permissions
    };
}

/// Display risk tier of a permission. Total: unknown names are Low.
pub fn classify_permission(name: &str) -> PermissionRisk {
    trace!("Accessing PERMISSIONS - classify {}", name);
    PERMISSIONS
        .get(name)
        .map_or(PermissionRisk::Low, |classified| classified.risk)
}

/// Membership in the dangerous class - the set that feeds the per-app
/// ranking metric. Distinct from `classify_permission` returning Critical.
pub fn is_critical_class(name: &str) -> bool {
    PERMISSIONS
        .get(name)
        .map_or(false, |classified| classified.critical_class)
}

pub fn get_permission_description(name: &str) -> Option<String> {
    PERMISSIONS
        .get(name)
        .and_then(|classified| classified.description.clone())
}

pub fn get_permission_group(name: &str) -> Option<String> {
    PERMISSIONS
        .get(name)
        .and_then(|classified| classified.group.clone())
}

/// Short presentation name: last dotted segment, underscores to spaces,
/// lowercase with a leading capital.
pub fn get_simple_permission_name(name: &str) -> String {
    let simple = name
        .rsplit('.')
        .next()
        .unwrap_or(name)
        .replace('_', " ")
        .to_lowercase();
    let mut chars = simple.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => simple,
    }
}
