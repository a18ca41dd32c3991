use crate::permission::*;
use crate::permission_classifier::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw package data handed over by the OS access layer, one per installed
/// application. `granted_flags` is indexed like `requested_permissions` but
/// may be shorter when the OS could not report flags for some indices.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawAppRecord {
    pub package_name: String,
    pub app_name: String,
    pub version_name: Option<String>,
    pub version_code: u64,
    pub is_system_app: bool,
    pub requested_permissions: Vec<String>,
    pub granted_flags: Vec<bool>,
    pub install_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl RawAppRecord {
    pub fn new() -> RawAppRecord {
        RawAppRecord {
            package_name: "".to_string(),
            app_name: "".to_string(),
            version_name: None,
            version_code: 0,
            is_system_app: false,
            requested_permissions: Vec::new(),
            granted_flags: Vec::new(),
            // Initialize the timestamps to UNIX_EPOCH
            install_time: DateTime::from_timestamp(0, 0).unwrap(),
            update_time: DateTime::from_timestamp(0, 0).unwrap(),
        }
    }
}

/// Classified permission profile of one installed application. Counts are
/// folds over `permissions`, computed once at construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppInfo {
    pub package_name: String,
    pub app_name: String,
    pub version_name: Option<String>,
    pub version_code: u64,
    pub is_system_app: bool,
    // Sorted by descending risk tier, request order preserved within a tier
    pub permissions: Vec<PermissionRecord>,
    pub total_permissions: usize,
    pub granted_permissions: usize,
    // Granted members of the dangerous class - the cross-app ranking key
    pub critical_granted_permissions: usize,
    pub install_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Classify one app's raw permission list. A missing grant flag means not
/// granted. Duplicate names are kept as separate records.
pub fn build_permission_records(names: &[String], flags: &[bool]) -> Vec<PermissionRecord> {
    let mut records: Vec<PermissionRecord> = names
        .iter()
        .enumerate()
        .map(|(index, name)| PermissionRecord {
            name: name.clone(),
            granted: flags.get(index).copied().unwrap_or(false),
            risk: classify_permission(name),
            group: get_permission_group(name),
            description: get_permission_description(name),
        })
        .collect();
    // sort_by is stable, ties keep the original request order
    records.sort_by(|a, b| b.risk.cmp(&a.risk));
    records
}

impl AppInfo {
    pub fn from_raw(raw: &RawAppRecord) -> AppInfo {
        let permissions =
            build_permission_records(&raw.requested_permissions, &raw.granted_flags);

        let total_permissions = permissions.len();
        let granted_permissions = permissions.iter().filter(|record| record.granted).count();
        let critical_granted_permissions = permissions
            .iter()
            .filter(|record| record.granted && is_critical_class(&record.name))
            .count();

        AppInfo {
            package_name: raw.package_name.clone(),
            app_name: raw.app_name.clone(),
            version_name: raw.version_name.clone(),
            version_code: raw.version_code,
            is_system_app: raw.is_system_app,
            permissions,
            total_permissions,
            granted_permissions,
            critical_granted_permissions,
            install_time: raw.install_time,
            update_time: raw.update_time,
        }
    }
}
