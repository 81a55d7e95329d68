//! Per-device learner profile identity.
//!
//! The profile is an opaque correlation key, not an account: it is generated
//! once, stored in browser local storage, and sent with learner-facing API
//! calls so the server can keep per-device progress. There is no
//! authentication attached to it.

use uuid::Uuid;

/// Storage key holding the generated profile identifier.
const STORAGE_KEY: &str = "english-buddy-profile";

/// Minimal key-value capability over the backing store. Implemented by
/// browser local storage in the app and by an in-memory map in tests.
pub trait ProfileStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage` store. All failures (storage disabled, quota)
/// degrade to "nothing stored".
pub struct LocalStorage;

impl ProfileStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            storage.set_item(key, value).ok();
        }
    }
}

/// Returns the stable profile identifier for this device, generating and
/// persisting one on first use.
///
/// The write is double-checked: after storing a fresh identifier the store
/// is read back, so two racing callers within the same storage lifetime
/// still converge on a single value. If the store drops the write entirely
/// (e.g. private browsing), the generated identifier is still returned and
/// the app works for the duration of the page load.
pub fn profile_id(store: &impl ProfileStore) -> String {
    if let Some(existing) = store.get(STORAGE_KEY) {
        return existing;
    }
    let generated = Uuid::new_v4().to_string();
    store.set(STORAGE_KEY, &generated);
    store.get(STORAGE_KEY).unwrap_or(generated)
}

/// Convenience wrapper over the real browser store.
pub fn device_profile_id() -> String {
    profile_id(&LocalStorage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStore {
        map: RefCell<HashMap<String, String>>,
        writable: bool,
    }

    impl FakeStore {
        fn writable() -> Self {
            FakeStore {
                map: RefCell::new(HashMap::new()),
                writable: true,
            }
        }

        fn read_only() -> Self {
            FakeStore {
                map: RefCell::new(HashMap::new()),
                writable: false,
            }
        }
    }

    impl ProfileStore for FakeStore {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            if self.writable {
                self.map.borrow_mut().insert(key.to_string(), value.to_string());
            }
        }
    }

    #[test]
    fn generates_once_per_storage_lifetime() {
        let store = FakeStore::writable();
        let first = profile_id(&store);
        let second = profile_id(&store);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn returns_previously_stored_value() {
        let store = FakeStore::writable();
        store.set(STORAGE_KEY, "kept-from-last-visit");
        assert_eq!(profile_id(&store), "kept-from-last-visit");
    }

    #[test]
    fn survives_a_store_that_drops_writes() {
        let store = FakeStore::read_only();
        let id = profile_id(&store);
        assert!(!id.is_empty());
    }
}
