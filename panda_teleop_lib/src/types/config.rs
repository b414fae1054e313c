use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Configuration for the joint teleoperation node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeleopConfig {
    /// Topic the trajectory commands are published on.
    pub topic: String,
    /// Position increment per keypress, in radians.
    pub step: f64,
    /// Time allotted to reach each commanded waypoint, in seconds.
    pub time_from_start: f64,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            topic: "/panda_arm_controller/joint_trajectory".to_string(),
            step: 0.1,
            time_from_start: 1.0,
        }
    }
}

impl TeleopConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TeleopConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Topic name as a Zenoh key expression.
    ///
    /// Key expressions must not begin with '/', so a ROS-style leading slash
    /// is stripped.
    pub fn key_expr(&self) -> &str {
        self.topic.trim_start_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_expr().is_empty() {
            return Err(eyre::eyre!("Topic name must not be empty"));
        }

        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(eyre::eyre!(
                "Step must be a positive finite value, got {}",
                self.step
            ));
        }

        if !self.time_from_start.is_finite() || self.time_from_start <= 0.0 {
            return Err(eyre::eyre!(
                "Time from start must be a positive finite value, got {}",
                self.time_from_start
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TeleopConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.topic, "/panda_arm_controller/joint_trajectory");
        assert_eq!(config.step, 0.1);
        assert_eq!(config.time_from_start, 1.0);
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let mut config = TeleopConfig::default();
        config.step = 0.0;
        assert!(config.validate().is_err());

        config.step = -0.1;
        assert!(config.validate().is_err());

        config.step = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_topic() {
        let mut config = TeleopConfig::default();
        config.topic = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_key_expr_strips_leading_slash() {
        let config = TeleopConfig::default();
        assert_eq!(config.key_expr(), "panda_arm_controller/joint_trajectory");
    }

    #[test]
    fn test_parses_toml() {
        let toml_str = r#"
            topic = "/panda_arm_controller/joint_trajectory"
            step = 0.05
            time_from_start = 2.0
        "#;
        let config: TeleopConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.step, 0.05);
        assert_eq!(config.time_from_start, 2.0);
    }
}
