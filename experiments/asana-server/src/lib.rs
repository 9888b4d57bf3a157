use {
    anyhow::{Context, Result},
    asana::{IdealAngleTable, Registry},
    base::log,
    serde::{Deserialize, Serialize},
    std::path::{Path, PathBuf},
};

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";

/// Posture backed by a reference angle table instead of a rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleTableConfig {
    /// Registry identifier clients send in `instructions`.
    pub id: String,
    /// Label reported back; defaults to the identifier.
    #[serde(default)]
    pub label: Option<String>,
    /// CSV or JSON table. Relative paths resolve against the config file.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    /// Write daily log files here instead of stdout.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub angle_tables: Vec<AngleTableConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDR.to_string(),
            log_dir: None,
            log_level: "info".to_string(),
            angle_tables: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid server config")
    }

    /// Read a JSON config file. Relative angle table paths are rewritten to
    /// be relative to the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config = Self::from_json_str(&json)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let Some(dir) = path.parent() {
            for table in &mut config.angle_tables {
                if table.path.is_relative() {
                    table.path = dir.join(&table.path);
                }
            }
        }
        Ok(config)
    }

    /// Built-in catalog plus every configured angle table.
    pub fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::builtin();
        for entry in &self.angle_tables {
            let table = IdealAngleTable::load(&entry.path)
                .with_context(|| format!("failed to load angle table {}", entry.path.display()))?;
            let label = entry.label.as_deref().unwrap_or(&entry.id);
            log::info!(
                "registered {} ({} triplets) from {}",
                entry.id,
                table.len(),
                entry.path.display()
            );
            registry = registry.with_angle_table(&entry.id, label, table);
        }
        Ok(registry)
    }
}
