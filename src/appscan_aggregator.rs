use crate::appscan_app_info::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Scan configuration, constructed by the caller and passed in explicitly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScanConfig {
    // The monitoring app itself, always excluded from its own results
    pub host_package: String,
}

impl ScanConfig {
    pub fn new(host_package: &str) -> ScanConfig {
        ScanConfig {
            host_package: host_package.to_string(),
        }
    }
}

/// Build classified profiles for one scan and rank them by the number of
/// granted dangerous-class permissions, most exposed first. Records without
/// a package name are dropped, the scan itself never fails.
pub fn aggregate(
    raw_apps: &[RawAppRecord],
    include_system_apps: bool,
    config: &ScanConfig,
) -> Vec<AppInfo> {
    let mut apps: Vec<AppInfo> = raw_apps
        .iter()
        .filter(|raw| {
            if raw.package_name.is_empty() {
                debug!("Dropping raw app record without a package name");
                return false;
            }
            raw.package_name != config.host_package
        })
        .filter(|raw| include_system_apps || !raw.is_system_app)
        .map(AppInfo::from_raw)
        .collect();

    // sort_by is stable, ties keep the OS enumeration order
    apps.sort_by(|a, b| {
        b.critical_granted_permissions
            .cmp(&a.critical_granted_permissions)
    });

    info!(
        "Aggregated {} apps from {} raw records (include_system_apps: {})",
        apps.len(),
        raw_apps.len(),
        include_system_apps
    );
    apps
}
