pub mod appscan_aggregator;
pub mod appscan_app_info;
pub mod appscan_list_state;
pub mod logger;
pub mod permission;
pub mod permission_classifier;
pub mod permission_db;
pub mod rwlock;
pub mod version;
