//! Generator configuration and its TOML loader.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CodegenError, CodegenResult};
use crate::fs::WipePolicy;

/// Attribute value the source icon set uses for its single ink color.
pub const DEFAULT_INK_COLOR: &str = "#676767";
/// View box used when an SVG declares neither `viewBox` nor a usable size.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";
/// Quiet period before a batch of file changes triggers regeneration.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
/// Output cleanup attempts before giving up.
pub const DEFAULT_WIPE_ATTEMPTS: u32 = 5;
/// Pause between output cleanup attempts.
pub const DEFAULT_WIPE_DELAY_MS: u64 = 2000;

/// Tunable generator settings.
///
/// Every field has a default, so a config file only needs the keys it overrides. A supplied
/// `replace_colors` table replaces the default table as a whole.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Attribute values rewritten during generation, matched case-insensitively.
    pub replace_colors: BTreeMap<String, String>,
    /// Fallback `viewBox` for icons without one.
    pub default_view_box: String,
    /// Watch-mode debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Number of attempts when wiping the output directory.
    pub wipe_attempts: u32,
    /// Delay between wipe attempts in milliseconds.
    pub wipe_delay_ms: u64,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            replace_colors: BTreeMap::from([(
                DEFAULT_INK_COLOR.to_string(),
                "currentColor".to_string(),
            )]),
            default_view_box: DEFAULT_VIEW_BOX.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            wipe_attempts: DEFAULT_WIPE_ATTEMPTS,
            wipe_delay_ms: DEFAULT_WIPE_DELAY_MS,
        }
    }
}

impl CodegenConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let body = fs::read_to_string(path).map_err(|err| {
            CodegenError::config(format!("failed to read config: {err}")).with_path(path)
        })?;
        Self::from_toml(&body).map_err(|err| err.with_path(path))
    }

    /// Parse and validate config text.
    pub fn from_toml(body: &str) -> CodegenResult<Self> {
        let config: Self = toml::from_str(body)
            .map_err(|err| CodegenError::config(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CodegenResult<()> {
        if self.wipe_attempts == 0 {
            return Err(CodegenError::config("wipe_attempts must be at least 1"));
        }
        if self.default_view_box.split_whitespace().count() != 4 {
            return Err(CodegenError::config(format!(
                "default_view_box must have four numbers, got `{}`",
                self.default_view_box
            )));
        }
        Ok(())
    }

    /// Cleanup retry policy for the output directory.
    pub fn wipe_policy(&self) -> WipePolicy {
        WipePolicy {
            attempts: self.wipe_attempts,
            delay: Duration::from_millis(self.wipe_delay_ms),
        }
    }

    /// Watch-mode debounce window.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenErrorCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CodegenConfig::from_toml("").expect("parse empty config");
        assert_eq!(config, CodegenConfig::default());
        assert_eq!(
            config.replace_colors.get("#676767").map(String::as_str),
            Some("currentColor")
        );
    }

    #[test]
    fn overrides_are_applied_per_key() {
        let config = CodegenConfig::from_toml(
            "debounce_ms = 50\nwipe_delay_ms = 0\n\n[replace_colors]\n\"#000\" = \"currentColor\"\n",
        )
        .expect("parse config");

        assert_eq!(config.debounce(), Duration::from_millis(50));
        assert_eq!(config.wipe_policy().delay, Duration::ZERO);
        assert_eq!(config.wipe_policy().attempts, DEFAULT_WIPE_ATTEMPTS);
        assert_eq!(config.replace_colors.len(), 1);
        assert!(config.replace_colors.contains_key("#000"));
    }

    #[test]
    fn unknown_keys_and_zero_attempts_are_rejected() {
        let err = CodegenConfig::from_toml("colour = 1").expect_err("unknown key");
        assert_eq!(err.category, CodegenErrorCategory::Config);

        let err = CodegenConfig::from_toml("wipe_attempts = 0").expect_err("zero attempts");
        assert_eq!(err.message, "wipe_attempts must be at least 1");
    }

    #[test]
    fn load_reports_missing_file_with_target() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.toml");
        let err = CodegenConfig::load(&path).expect_err("missing file");
        assert_eq!(err.category, CodegenErrorCategory::Config);
        assert_eq!(err.target, Some(path.display().to_string()));
    }
}
