//! Ordered route storage shared between test code and request handlers.
//!
//! Mutations publish a fresh immutable list; readers take a cheap `Arc`
//! clone and match against it without holding the lock. A request therefore
//! always sees the whole list from before or after a concurrent
//! `register`/`reset`, never a half-applied one.

use super::types::Route;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Immutable view of the registered routes, in registration order.
pub type Snapshot = Arc<[Arc<Route>]>;

fn empty_snapshot() -> Snapshot {
    Arc::from(Vec::<Arc<Route>>::new())
}

pub struct Registry {
    routes: RwLock<Snapshot>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(empty_snapshot()),
        }
    }

    /// Append one route. Duplicates are allowed; the newest one shadows older
    /// routes matching the same requests.
    pub fn register(&self, route: Route) {
        self.extend(std::iter::once(route));
    }

    /// Append a batch of routes as a single publish. Returns how many were added.
    pub fn extend<I>(&self, routes: I) -> usize
    where
        I: IntoIterator<Item = Route>,
    {
        let added: Vec<Arc<Route>> = routes.into_iter().map(Arc::new).collect();
        let count = added.len();
        if count == 0 {
            return 0;
        }

        let mut current = self.routes.write();
        let mut next = Vec::with_capacity(current.len() + count);
        next.extend(current.iter().cloned());
        next.extend(added);
        *current = Arc::from(next);
        debug!("Registered {} route(s), {} total", count, current.len());
        count
    }

    /// Drop every route.
    pub fn reset(&self) {
        *self.routes.write() = empty_snapshot();
        debug!("Registry reset");
    }

    /// Current routes for one match operation.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.routes.read())
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
