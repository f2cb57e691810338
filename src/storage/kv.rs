use crate::errors::AppResult;

/// Storage key holding the JSON-encoded attendance list.
pub const KEY_ATTENDANCE: &str = "data.presensi.v1";
/// Storage key holding the JSON-encoded visitor list.
pub const KEY_VISITORS: &str = "data.bukutamu.v1";
/// Storage key holding the plain data version string.
pub const KEY_VERSION: &str = "data.version";

/// Version stamped on every load.
pub const APP_DATA_VERSION: &str = "1.0.0";

/// Minimal string key-value persistence.
///
/// Keys are never deleted; `set` replaces the whole value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}
