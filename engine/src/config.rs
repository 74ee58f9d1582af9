use serde::Deserialize;

use crate::combat::{CombatController, DiceCount};
use crate::dice::Dice;
use crate::error::{CombatError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a file extension; anything unknown is JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Starting state for a session. Missing fields fall back to an unseeded
/// roller and three dice per side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub attackers: DiceCount,
    #[serde(default)]
    pub defenders: DiceCount,
}

impl SessionConfig {
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(|e| CombatError::Config(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| CombatError::Config(e.to_string()))
            }
        }
    }

    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::from_seed(seed),
            None => Dice::from_entropy(),
        }
    }

    pub fn controller(&self) -> CombatController<Dice> {
        CombatController::with_counts(self.dice(), self.attackers, self.defenders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = SessionConfig::parse("{}", ConfigFormat::Json).unwrap();
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.attackers, DiceCount::Three);
    }

    #[test]
    fn yaml_sets_counts() {
        let cfg = SessionConfig::parse("seed: 5\nattackers: 2\ndefenders: 1\n", ConfigFormat::Yaml)
            .unwrap();
        assert_eq!(cfg.seed, Some(5));
        let ctl = cfg.controller();
        assert_eq!(ctl.count(Side::Attacker), DiceCount::Two);
        assert_eq!(ctl.count(Side::Defender), DiceCount::One);
    }

    #[test]
    fn out_of_range_count_is_rejected() {
        let err = SessionConfig::parse(r#"{"attackers": 4}"#, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, CombatError::Config(msg) if msg.contains("outside 1..=3")));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_extension(Some("YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_extension(Some("json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_extension(None), ConfigFormat::Json);
    }
}
