//! Configuration settings for world simulation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub world: WorldConfig,
    pub seeding: SeedingConfig,
    pub display: DisplayConfig,
}

/// Defaults for worlds that are initialized without explicit dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub rows: usize,
    pub columns: usize,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedingConfig {
    pub origin_row: usize,
    pub origin_col: usize,
    /// Fixed RNG seed; `None` seeds from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive: char,
    pub dead: char,
    pub refresh_seconds: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                rows: 25,
                columns: 50,
                rule: "2.3/3".to_string(),
            },
            seeding: SeedingConfig {
                origin_row: 3,
                origin_col: 3,
                seed: None,
            },
            display: DisplayConfig {
                alive: '█',
                dead: '·',
                refresh_seconds: 0.5,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display.alive == self.display.dead {
            anyhow::bail!(
                "Alive and dead glyphs must differ (both are '{}')",
                self.display.alive
            );
        }

        if !self.display.refresh_seconds.is_finite() || self.display.refresh_seconds < 0.0 {
            anyhow::bail!(
                "Refresh interval must be a non-negative number of seconds, got {}",
                self.display.refresh_seconds
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.world.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.world.columns = columns;
        }
        if let Some(ref rule) = cli_overrides.rule {
            self.world.rule = rule.clone();
        }
        if let Some(seed) = cli_overrides.seed {
            self.seeding.seed = Some(seed);
        }
        if let Some(alive) = cli_overrides.alive {
            self.display.alive = alive;
        }
        if let Some(dead) = cli_overrides.dead {
            self.display.dead = dead;
        }
        if let Some(refresh) = cli_overrides.refresh_seconds {
            self.display.refresh_seconds = refresh;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub rule: Option<String>,
    pub seed: Option<u64>,
    pub alive: Option<char>,
    pub dead: Option<char>,
    pub refresh_seconds: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.seeding.seed = Some(11);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_seed_may_be_omitted() {
        let yaml = r##"
world: { rows: 30, columns: 40, rule: "2.3/3" }
seeding: { origin_row: 2, origin_col: 4 }
display: { alive: "#", dead: ".", refresh_seconds: 0.0 }
"##;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.seeding.seed, None);
        assert_eq!(settings.display.alive, '#');
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.display.dead = settings.display.alive;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.display.refresh_seconds = -1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            rows: Some(40),
            rule: Some("3.4/2".to_string()),
            alive: Some('O'),
            ..Default::default()
        });

        assert_eq!(settings.world.rows, 40);
        assert_eq!(settings.world.columns, 50);
        assert_eq!(settings.world.rule, "3.4/2");
        assert_eq!(settings.display.alive, 'O');
        assert_eq!(settings.display.dead, '·');
    }
}
