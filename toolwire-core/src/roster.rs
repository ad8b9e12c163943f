use registry::Endpoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk declaration of a set of endpoints. Carries names and event
/// lists only; connection flags are never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub description: String,
    pub endpoints: usize,
    pub path: PathBuf,
}

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterDefinition {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RosterError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let data = fs::read(path)?;
        let definition = serde_json::from_slice(&data)?;
        Ok(definition)
    }
}

/// Scans a directory for roster files and returns name-sorted summaries.
/// Unreadable or non-roster files are skipped.
pub fn scan_roster_entries(roster_dir: &Path) -> Vec<RosterEntry> {
    let mut entries = Vec::new();
    if let Ok(dir_entries) = fs::read_dir(roster_dir) {
        for entry in dir_entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Ok(data) = fs::read(&path) {
                if let Ok(roster) = serde_json::from_slice::<RosterDefinition>(&data) {
                    entries.push(RosterEntry {
                        name: roster.name,
                        description: roster.description,
                        endpoints: roster.endpoints.len(),
                        path,
                    });
                }
            }
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
