use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::log;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::{Instant, Duration, SystemTime};

/// File-backed json store, one file per key under `{root}/{name}/`.
pub struct Db<K: Display, V: DeserializeOwned + Serialize> {
    pub root: String,
    pub name: String,
    pub key_type: std::marker::PhantomData<K>,
    pub value_type: std::marker::PhantomData<V>,
}

impl<K: Display, V: DeserializeOwned + Serialize> Db<K, V> {
    pub fn new(root: &str, name: &str) -> Db<K, V> {
        Db {
            root: root.to_string(),
            name: name.to_string(),
            key_type: std::marker::PhantomData,
            value_type: std::marker::PhantomData,
        }
    }

    pub fn read(&self, key: &K) -> Option<V> {
        let path = self.get_path(&key.to_string());
        Db::<K, V>::read_file(&path)
    }

    pub fn write(&self, key: &K, obj: &V) -> std::io::Result<()> {
        let before = Instant::now();
        let json = serde_json::to_string(&obj)?;
        let path = self.get_path(&key.to_string());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, json)?;
        log::debug!("[DB] Wrote to file {}/{} {:.2?}", self.name, key, before.elapsed());
        Ok(())
    }

    pub fn is_stale(&self, key: &K, delta_s: Option<Duration>) -> bool {
        let path = self.get_path(&key.to_string());
        std::fs::metadata(path)
            .and_then(|e| e.modified())
            .map(|m| {
                if let Some(delta_s) = delta_s {
                    SystemTime::now().duration_since(m).map(|age| age > delta_s).unwrap_or(false)
                } else {
                    false // if None and file exists => never stale
                }
            })
            .unwrap_or(true) // file doesn't exists => stale
    }

    fn read_file(path: &Path) -> Option<V> {
        let before = Instant::now();
        let data = std::fs::read_to_string(path).ok()?;
        let res = match serde_json::from_str(&data) {
            Ok(e) => Some(e),
            Err(e) => {
                log::error!("[DB] Read failed {} {}", path.display(), e);
                None
            }
        };
        log::debug!("[DB] Read from file {} {:.2?}", path.display(), before.elapsed());
        res
    }

    fn get_path(&self, key: &str) -> PathBuf {
        PathBuf::from(&self.root).join(&self.name).join(sanitize_key(key))
    }
}

/// Urls are used as keys, keep them to a single path segment
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
        .collect()
}
