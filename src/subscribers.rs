use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

/// In-memory roster of newsletter signups, one formatted
/// `"first last | email"` entry per subscriber.
///
/// Entries only live for the process lifetime; a restart drops them.
/// The handle is cheap to clone and every clone shares the same set,
/// guarded by a mutex since actix-web workers run on multiple threads.
#[derive(Clone, Debug, Default)]
pub struct SubscriberRoster(Arc<Mutex<HashSet<String>>>);

impl SubscriberRoster {
    /// Returns `false` if the exact entry was already present.
    pub fn add(&self, entry: String) -> bool {
        self.lock().insert(entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.lock().contains(entry)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.0.lock().expect("subscriber roster mutex poisoned")
    }
}
