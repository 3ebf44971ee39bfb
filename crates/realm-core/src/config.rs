//! Configuration for assembling a realm.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chronicle::Chronicle;
use crate::error::{RealmError, RealmResult};
use crate::factory::{Armament, Barracks};
use crate::memory::RecallMode;

/// Settings for the barracks, fighting memory, and chronicle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    /// What the barracks arms its warriors with.
    pub armament: Armament,
    /// How technique recall walks the fighting memory.
    pub recall_mode: RecallMode,
    /// Maximum chronicle length (oldest lines dropped when exceeded). 0 = unlimited.
    pub chronicle_capacity: usize,
}

impl RealmConfig {
    /// Set the barracks armament.
    pub fn with_armament(mut self, armament: Armament) -> Self {
        self.armament = armament;
        self
    }

    /// Set the recall mode.
    pub fn with_recall_mode(mut self, mode: RecallMode) -> Self {
        self.recall_mode = mode;
        self
    }

    /// Set the chronicle capacity (0 = unlimited).
    pub fn with_chronicle_capacity(mut self, capacity: usize) -> Self {
        self.chronicle_capacity = capacity;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> RealmResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> RealmResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| RealmError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// A barracks configured with this armament.
    pub fn barracks(&self) -> Barracks {
        Barracks::new(self.armament)
    }

    /// An empty chronicle with this capacity.
    pub fn chronicle(&self) -> Chronicle {
        Chronicle::new(self.chronicle_capacity)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn config_default_values() {
        let config = RealmConfig::default();
        assert_eq!(config.armament, Armament::Sword);
        assert_eq!(config.recall_mode, RecallMode::FanOut);
        assert_eq!(config.chronicle_capacity, 0);
    }

    #[test]
    fn config_builder_chain() {
        let config = RealmConfig::default()
            .with_armament(Armament::Spear)
            .with_recall_mode(RecallMode::FirstMatch)
            .with_chronicle_capacity(10);
        assert_eq!(config.armament, Armament::Spear);
        assert_eq!(config.recall_mode, RecallMode::FirstMatch);
        assert_eq!(config.chronicle_capacity, 10);
        assert_eq!(config.barracks().summon().weapon(), "spear");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = RealmConfig::from_json(r#"{ "armament": "spear" }"#).unwrap();
        assert_eq!(config.armament, Armament::Spear);
        assert_eq!(config.recall_mode, RecallMode::FanOut);
    }

    #[test]
    fn armament_name_is_case_insensitive() {
        let config = RealmConfig::from_json(r#"{ "armament": "Spear" }"#).unwrap();
        assert_eq!(config.armament, Armament::Spear);
        let config = RealmConfig::from_json(r#"{ "armament": "SWORD" }"#).unwrap();
        assert_eq!(config.armament, Armament::Sword);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = RealmConfig::from_json(r#"{ "armament": "axe" }"#).unwrap_err();
        assert!(matches!(err, RealmError::InvalidConfig(_)));
        assert!(err.to_string().contains("unknown armament"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "recall_mode": "first_match", "chronicle_capacity": 3 }}"#
        )
        .unwrap();

        let config = RealmConfig::load(file.path()).unwrap();
        assert_eq!(config.recall_mode, RecallMode::FirstMatch);
        assert_eq!(config.chronicle().len(), 0);
        assert_eq!(config.chronicle_capacity, 3);
    }

    #[test]
    fn load_missing_file() {
        let err = RealmConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, RealmError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn round_trip_serde() {
        let config = RealmConfig::default().with_armament(Armament::Spear);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RealmConfig::from_json(&json).unwrap(), config);
    }
}
