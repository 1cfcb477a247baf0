use crate::NAME_STORAGE_KEY;
use serde_json::Map;
use serde_json::Value;
use std::path::PathBuf;

/// Persistent home for the chosen player name.
/// Storage is best-effort: callers treat failures as "not persisted".
pub trait NameStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, name: &str) -> anyhow::Result<()>;
}

/// JSON file holding string values under well-known keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    fn entries(&self) -> anyhow::Result<Map<String, Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl NameStore for FileStore {
    fn load(&self) -> Option<String> {
        self.entries()
            .inspect_err(|e| log::debug!("[identity] unreadable store {:?}: {}", self.path, e))
            .ok()?
            .get(NAME_STORAGE_KEY)?
            .as_str()
            .map(String::from)
    }
    fn save(&mut self, name: &str) -> anyhow::Result<()> {
        let mut entries = self.entries().unwrap_or_default();
        entries.insert(NAME_STORAGE_KEY.to_string(), Value::from(name));
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Volatile store, also used when no persistent storage is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Option<String>);

impl MemoryStore {
    pub fn with(name: &str) -> Self {
        Self(Some(name.to_string()))
    }
}

impl NameStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.clone()
    }
    fn save(&mut self, name: &str) -> anyhow::Result<()> {
        self.0 = Some(name.to_string());
        Ok(())
    }
}
