use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::console_warn;
use crate::services::errors::ConfigError;

/// LocalStorage key holding an optional JSON override of [`OverlayConfig`]
pub const CONFIG_STORAGE_KEY: &str = "login_overlay_config";

/// Timings and transport settings for the login overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long a toast stays on screen before it starts leaving
    pub toast_duration_ms: u32,
    /// Toast exit animation length
    pub toast_exit_ms: u32,
    /// Delay between a successful result toast and the follow-up transition
    pub result_transition_ms: u32,
    /// Overlay exit animation length after a successful login
    pub overlay_exit_ms: u32,
    /// `targetOrigin` passed to `postMessage`
    pub target_origin: String,
    /// Give up on a pending request after this long. `None` waits forever.
    pub request_timeout_ms: Option<u32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            toast_exit_ms: 300,
            result_transition_ms: 1500,
            overlay_exit_ms: 500,
            target_origin: "*".to_string(),
            request_timeout_ms: None,
        }
    }
}

impl OverlayConfig {
    /// Loads the stored override, falling back to defaults when it is absent or unusable
    pub fn load() -> Self {
        let stored: Result<OverlayConfig, _> = LocalStorage::get(CONFIG_STORAGE_KEY);
        match stored {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    console_warn!("[Config] Ignoring stored overlay config: {}", e);
                    Self::default()
                }
            },
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Self::default(),
            Err(e) => {
                console_warn!("[Config] Failed to read stored overlay config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("toast_duration_ms", self.toast_duration_ms),
            ("toast_exit_ms", self.toast_exit_ms),
            ("result_transition_ms", self.result_transition_ms),
            ("overlay_exit_ms", self.overlay_exit_ms),
        ];
        if let Some((field, _)) = durations.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroDuration { field: *field });
        }

        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::ZeroDuration {
                field: "request_timeout_ms",
            });
        }

        if self.target_origin.trim().is_empty() {
            return Err(ConfigError::EmptyTargetOrigin);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_overlay_timings() {
        let config = OverlayConfig::default();
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.result_transition_ms, 1500);
        assert_eq!(config.target_origin, "*");
        assert_eq!(config.request_timeout_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: OverlayConfig =
            serde_json::from_str(r#"{ "request_timeout_ms": 10000 }"#).unwrap();
        assert_eq!(config.request_timeout_ms, Some(10000));
        assert_eq!(config.toast_duration_ms, 4000);
    }

    #[test]
    fn test_validate_rejects_zero_durations_and_empty_origin() {
        let config = OverlayConfig {
            toast_exit_ms: 0,
            ..OverlayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDuration {
                field: "toast_exit_ms"
            })
        ));

        let config = OverlayConfig {
            request_timeout_ms: Some(0),
            ..OverlayConfig::default()
        };
        assert!(config.validate().is_err());

        let config = OverlayConfig {
            target_origin: " ".to_string(),
            ..OverlayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTargetOrigin)
        ));
    }
}
