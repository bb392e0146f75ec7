use crate::models::Country;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// String-keyed, string-valued durable storage (the shape of browser local storage).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`. Either the whole write lands or nothing changes.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store for tests and one-off runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys live in one JSON object file, rewritten in full on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, treating a missing file as an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            if txt.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&txt).with_context(|| format!("parse {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(serde_json::to_string_pretty(entries)?.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        log::debug!("wrote {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }
}

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn csv_safe(s: &str) -> String {
    if s.starts_with(['=', '+', '-', '@']) {
        format!("'{}", s)
    } else {
        s.to_string()
    }
}

/// Save countries as CSV with header.
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["name", "cca2", "cca3", "region", "capital", "population", "area"])?;
    for c in countries {
        wtr.write_record([
            csv_safe(c.common_name()),
            csv_safe(c.cca2.as_deref().unwrap_or("")),
            csv_safe(c.cca3.as_deref().unwrap_or("")),
            csv_safe(c.region.as_deref().unwrap_or("")),
            csv_safe(c.first_capital().unwrap_or("")),
            c.population.to_string(),
            c.area.map(|a| a.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save countries as a pretty JSON array (same shape as the API records).
pub fn save_json<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(countries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let list = vec![Country::new("Peru", 33_000_000).with_codes("PE", "PER")];
        save_csv(&list, &csvp).unwrap();
        save_json(&list, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
