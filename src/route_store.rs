use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// A registered path → target mapping
///
/// `target` is display-only: nothing is ever forwarded to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DynamicRoute {
    pub id: i64,
    pub path: String,
    pub target: String,
    pub desc: String,
}

/// Errors returned by [`RouteStore`] mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("path already registered: {path}")]
    Conflict { path: String },
    #[error("route not found: {id}")]
    NotFound { id: i64 },
}

#[derive(Debug)]
struct Table {
    routes: Vec<DynamicRoute>,
    next_id: i64,
}

/// In-memory table of dynamic routes
///
/// Entries are kept in insertion order and ids come from a counter that only
/// ever increments, so a deleted id is never handed out again. Every call takes
/// the lock once, which makes each operation atomic with respect to the others.
#[derive(Debug)]
pub struct RouteStore {
    table: RwLock<Table>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                routes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all routes in insertion order
    pub fn list(&self) -> Vec<DynamicRoute> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table.routes.clone()
    }

    /// Register a new route, rejecting a path that is already present
    ///
    /// Callers validate that `path` and `target` are non-empty.
    pub fn insert(
        &self,
        path: impl Into<String>,
        target: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<DynamicRoute, StoreError> {
        let path = path.into();
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);

        if table.routes.iter().any(|route| route.path == path) {
            return Err(StoreError::Conflict { path });
        }

        let route = DynamicRoute {
            id: table.next_id,
            path,
            target: target.into(),
            desc: desc.into(),
        };
        table.next_id += 1;
        table.routes.push(route.clone());

        tracing::info!(
            id = route.id,
            path = %route.path,
            target = %route.target,
            "Dynamic route registered"
        );
        Ok(route)
    }

    /// Remove the route with the given id, keeping the order of the rest
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);

        let index = table
            .routes
            .iter()
            .position(|route| route.id == id)
            .ok_or(StoreError::NotFound { id })?;
        let removed = table.routes.remove(index);

        tracing::info!(id = removed.id, path = %removed.path, "Dynamic route deleted");
        Ok(())
    }

    /// First route whose path equals `path` exactly
    pub fn find_by_path(&self, path: &str) -> Option<DynamicRoute> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table.routes.iter().find(|route| route.path == path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn paths(store: &RouteStore) -> Vec<String> {
        store.list().into_iter().map(|route| route.path).collect()
    }

    #[test]
    fn test_store_starts_empty() {
        let store = RouteStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = RouteStore::new();

        let first = store.insert("/foo", "svc-a", "demo").unwrap();
        let second = store.insert("/bar", "svc-b", "").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.target, "svc-a");
        assert_eq!(first.desc, "demo");
        assert_eq!(paths(&store), vec!["/foo", "/bar"]);
    }

    #[test]
    fn test_insert_duplicate_path_conflicts() {
        let store = RouteStore::new();
        store.insert("/foo", "svc-a", "").unwrap();

        let err = store.insert("/foo", "svc-b", "").unwrap_err();

        assert_eq!(err, StoreError::Conflict { path: "/foo".to_string() });
        let routes = store.list();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].target, "svc-a");
    }

    #[test]
    fn test_conflict_does_not_consume_an_id() {
        let store = RouteStore::new();
        store.insert("/foo", "svc-a", "").unwrap();
        store.insert("/foo", "svc-b", "").unwrap_err();

        let next = store.insert("/bar", "svc-c", "").unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_delete_preserves_order_of_remaining_routes() {
        let store = RouteStore::new();
        store.insert("/a", "svc-a", "").unwrap();
        let middle = store.insert("/b", "svc-b", "").unwrap();
        store.insert("/c", "svc-c", "").unwrap();

        store.delete(middle.id).unwrap();

        let remaining = store.list();
        assert_eq!(remaining.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(paths(&store), vec!["/a", "/c"]);
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let store = RouteStore::new();
        let route = store.insert("/foo", "svc-a", "").unwrap();
        store.delete(route.id).unwrap();

        let again = store.insert("/foo", "svc-a", "").unwrap();
        assert_eq!(again.id, 2);
    }

    #[test]
    fn test_delete_unknown_id_leaves_store_unchanged() {
        let store = RouteStore::new();
        store.insert("/foo", "svc-a", "").unwrap();

        assert_eq!(store.delete(999), Err(StoreError::NotFound { id: 999 }));
        assert_eq!(store.delete(-1), Err(StoreError::NotFound { id: -1 }));
        assert_eq!(paths(&store), vec!["/foo"]);
    }

    #[test]
    fn test_delete_on_empty_store() {
        let store = RouteStore::new();
        assert_eq!(store.delete(999), Err(StoreError::NotFound { id: 999 }));
    }

    #[test]
    fn test_find_by_path_is_exact() {
        let store = RouteStore::new();
        store.insert("/foo", "svc-a", "").unwrap();

        assert_eq!(store.find_by_path("/foo").map(|r| r.target), Some("svc-a".to_string()));
        assert!(store.find_by_path("/foo/").is_none());
        assert!(store.find_by_path("/fo").is_none());
        assert!(store.find_by_path("/foo/bar").is_none());
    }

    #[test]
    fn test_concurrent_inserts_get_unique_ids() {
        let store = Arc::new(RouteStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| store.insert(format!("/t{}/{}", t, i), "svc", "").unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
        assert_eq!(store.list().len(), 200);
    }

    #[test]
    fn test_concurrent_duplicate_inserts_admit_one() {
        let store = Arc::new(RouteStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert("/same", format!("svc-{}", t), "").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.list().len(), 1);
    }
}
