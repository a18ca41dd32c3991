use crate::appscan_app_info::*;
use crate::rwlock::CustomRwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

// Snapshots a slow subscriber may fall behind by before it starts lagging
const SNAPSHOT_CHANNEL_SIZE: usize = 16;

/// Whole-scan counters, computed over the unfiltered app list. An app is
/// safe when it holds no granted dangerous-class permission.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub total_apps: usize,
    pub safe_apps: usize,
    pub risky_apps: usize,
}

/// One complete, internally consistent snapshot of the app list view.
/// `visible_apps` and `summary` are derived and rebuilt on every transition,
/// they are never edited on their own.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppListState {
    pub all_apps: Vec<AppInfo>,
    pub query: String,
    pub include_system_apps: bool,
    pub visible_apps: Vec<AppInfo>,
    pub summary: ScanSummary,
}

impl AppListState {
    pub fn new() -> AppListState {
        AppListState {
            all_apps: Vec::new(),
            query: "".to_string(),
            include_system_apps: false,
            visible_apps: Vec::new(),
            summary: ScanSummary::default(),
        }
    }

    fn matches_query(app: &AppInfo, query: &str) -> bool {
        app.app_name.to_lowercase().contains(query)
            || app.package_name.to_lowercase().contains(query)
    }

    fn recompute(&mut self) {
        let query = self.query.to_lowercase();
        self.visible_apps = if query.trim().is_empty() {
            self.all_apps.clone()
        } else {
            self.all_apps
                .iter()
                .filter(|app| Self::matches_query(app, &query))
                .cloned()
                .collect()
        };

        // The summary reflects the full scan, not the filtered view
        let safe_apps = self
            .all_apps
            .iter()
            .filter(|app| app.critical_granted_permissions == 0)
            .count();
        self.summary = ScanSummary {
            total_apps: self.all_apps.len(),
            safe_apps,
            risky_apps: self.all_apps.len() - safe_apps,
        };
    }
}

/// Single-writer container for the list view state. Transitions mutate the
/// state under the write lock, rebuild the derived fields, then publish the
/// finished snapshot. Readers either poll `current` or `subscribe` to
/// receive every published snapshot.
pub struct AppListStore {
    state: CustomRwLock<AppListState>,
    publisher: broadcast::Sender<AppListState>,
}

impl AppListStore {
    pub fn new() -> AppListStore {
        let (publisher, _) = broadcast::channel(SNAPSHOT_CHANNEL_SIZE);
        AppListStore {
            state: CustomRwLock::new(AppListState::new()),
            publisher,
        }
    }

    pub async fn current(&self) -> AppListState {
        self.state.read().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppListState> {
        self.publisher.subscribe()
    }

    async fn transition<F>(&self, apply: F) -> AppListState
    where
        F: FnOnce(&mut AppListState),
    {
        let mut state = self.state.write().await;
        apply(&mut state);
        state.recompute();
        let snapshot = state.clone();
        // Publish while still holding the write guard so snapshots reach
        // subscribers in transition order. send never blocks, and no
        // receivers is fine, polling via current() is also supported.
        let _ = self.publisher.send(snapshot.clone());
        snapshot
    }

    /// Replace the app list with a fresh aggregation snapshot. The query and
    /// the system-apps flag survive the replacement.
    pub async fn set_all_apps(&self, apps: Vec<AppInfo>) -> AppListState {
        trace!("Publishing a new app list snapshot of {} apps", apps.len());
        self.transition(|state| state.all_apps = apps).await
    }

    /// Case-insensitive substring filter over app name and package name.
    /// A blank query matches everything.
    pub async fn set_query(&self, query: &str) -> AppListState {
        self.transition(|state| state.query = query.to_string())
            .await
    }

    /// Flip the system-apps intent and return the new flag. The app list is
    /// untouched: the caller owns the decision to re-enumerate and push a
    /// fresh snapshot through `set_all_apps`.
    pub async fn toggle_system_apps(&self) -> bool {
        let snapshot = self
            .transition(|state| state.include_system_apps = !state.include_system_apps)
            .await;
        snapshot.include_system_apps
    }
}

impl Default for AppListStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn app(package: &str, name: &str, perms: &[(&str, bool)]) -> AppInfo {
        let mut raw = RawAppRecord::new();
        raw.package_name = package.to_string();
        raw.app_name = name.to_string();
        raw.requested_permissions = perms.iter().map(|(p, _)| p.to_string()).collect();
        raw.granted_flags = perms.iter().map(|(_, granted)| *granted).collect();
        AppInfo::from_raw(&raw)
    }

    fn sample_apps() -> Vec<AppInfo> {
        vec![
            app("com.a", "Alpha", &[("android.permission.CAMERA", true)]),
            app("com.b", "Beta", &[("android.permission.CAMERA", false)]),
        ]
    }

    #[tokio::test]
    #[serial]
    async fn query_filters_by_name_and_package() {
        let store = AppListStore::new();
        store.set_all_apps(sample_apps()).await;

        let state = store.set_query("alp").await;
        assert_eq!(state.visible_apps.len(), 1);
        assert_eq!(state.visible_apps[0].app_name, "Alpha");

        // Package names match too, case-insensitively
        let state = store.set_query("COM.B").await;
        assert_eq!(state.visible_apps.len(), 1);
        assert_eq!(state.visible_apps[0].package_name, "com.b");

        let state = store.set_query("").await;
        assert_eq!(state.visible_apps.len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn summary_ignores_the_filter() {
        let store = AppListStore::new();
        store.set_all_apps(sample_apps()).await;
        let state = store.set_query("alp").await;

        assert_eq!(state.visible_apps.len(), 1);
        assert_eq!(state.summary.total_apps, 2);
        assert_eq!(state.summary.safe_apps, 1);
        assert_eq!(state.summary.risky_apps, 1);
    }

    #[tokio::test]
    #[serial]
    async fn toggle_flips_intent_without_touching_the_list() {
        let store = AppListStore::new();
        store.set_all_apps(sample_apps()).await;

        assert!(store.toggle_system_apps().await);
        let state = store.current().await;
        assert_eq!(state.all_apps.len(), 2);
        assert!(state.include_system_apps);

        assert!(!store.toggle_system_apps().await);
    }

    #[tokio::test]
    #[serial]
    async fn query_survives_a_snapshot_replacement() {
        let store = AppListStore::new();
        store.set_query("alp").await;
        let state = store.set_all_apps(sample_apps()).await;

        assert_eq!(state.query, "alp");
        assert_eq!(state.visible_apps.len(), 1);
        assert_eq!(state.visible_apps[0].app_name, "Alpha");
    }

    #[tokio::test]
    #[serial]
    async fn summary_counts_always_add_up() {
        let store = AppListStore::new();
        let check = |state: &AppListState| {
            assert_eq!(
                state.summary.total_apps,
                state.summary.safe_apps + state.summary.risky_apps
            );
        };

        check(&store.current().await);
        check(&store.set_all_apps(sample_apps()).await);
        check(&store.set_query("beta").await);
        store.toggle_system_apps().await;
        check(&store.current().await);
        check(&store.set_all_apps(Vec::new()).await);
        check(&store.set_query("").await);
    }

    #[tokio::test]
    #[serial]
    async fn empty_scan_yields_a_zero_summary() {
        let store = AppListStore::new();
        let state = store.set_all_apps(Vec::new()).await;
        assert_eq!(state.summary, ScanSummary::default());
        assert!(state.visible_apps.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn subscribers_receive_complete_snapshots() {
        let store = AppListStore::new();
        let mut receiver = store.subscribe();

        store.set_all_apps(sample_apps()).await;
        let snapshot = receiver.recv().await.expect("Missing snapshot");
        assert_eq!(snapshot.all_apps.len(), 2);
        assert_eq!(snapshot.summary.total_apps, 2);

        store.set_query("alp").await;
        let snapshot = receiver.recv().await.expect("Missing snapshot");
        assert_eq!(snapshot.visible_apps.len(), 1);
        // Derived fields are never stale relative to their inputs
        assert_eq!(snapshot.summary.total_apps, snapshot.all_apps.len());
    }

    #[tokio::test]
    #[serial]
    async fn snapshots_are_published_in_transition_order() {
        let store = AppListStore::new();
        let mut receiver = store.subscribe();

        store.set_all_apps(sample_apps()).await;
        store.set_query("alp").await;
        store.set_query("beta").await;
        store.toggle_system_apps().await;

        let queries: Vec<(String, bool)> = vec![
            receiver.recv().await.expect("Missing snapshot"),
            receiver.recv().await.expect("Missing snapshot"),
            receiver.recv().await.expect("Missing snapshot"),
            receiver.recv().await.expect("Missing snapshot"),
        ]
        .into_iter()
        .map(|snapshot| (snapshot.query, snapshot.include_system_apps))
        .collect();

        assert_eq!(
            queries,
            vec![
                ("".to_string(), false),
                ("alp".to_string(), false),
                ("beta".to_string(), false),
                ("beta".to_string(), true),
            ]
        );
        // The last published snapshot is the current one
        let state = store.current().await;
        assert_eq!(state.query, "beta");
        assert!(state.include_system_apps);
    }
}
