use serde::{Deserialize, Serialize};
use strum_macros::Display;

// Only Strings in order to easily read the JSON array
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, PartialOrd)]
pub struct PermissionInfoJSON {
    pub name: String,
    // "critical", "dangerous" or "sensitive"
    pub class: String,
    pub group: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, PartialOrd)]
pub struct PermissionInfoListJSON {
    pub date: String,
    pub signature: String,
    pub permissions: Vec<PermissionInfoJSON>,
}

/// Display risk tier of a single permission, most severe last.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
)]
pub enum PermissionRisk {
    Low,
    Medium,
    High,
    Critical,
}

/// One requested permission on one app. The risk tier is resolved once from
/// the classification database and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PermissionRecord {
    pub name: String,
    pub granted: bool,
    pub risk: PermissionRisk,
    pub group: Option<String>,
    pub description: Option<String>,
}
