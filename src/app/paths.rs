// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override**: parameter to [`get_app_config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir`, registered via [`init_cli_overrides`]
//! 3. **Environment variable** `ICED_SHOWCASE_CONFIG_DIR`
//! 4. **Platform default** via `dirs`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config dir.
const APP_NAME: &str = "IcedShowcase";

pub const ENV_CONFIG_DIR: &str = "ICED_SHOWCASE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` value. Only the first call has any effect.
///
/// Returns `false` if an override had already been registered.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory, e.g. `~/.config/IcedShowcase/` on Linux.
///
/// `None` only when the platform has no notion of a config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_config_dir() {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = PathBuf::from("/tmp/showcase-override");
        assert_eq!(
            get_app_config_dir_with_override(Some(dir.clone())),
            Some(dir)
        );
    }

    #[test]
    fn default_dir_ends_with_app_name() {
        // Only meaningful when neither the CLI nor the environment redirect it.
        if get_cli_config_dir().is_some() || env_config_dir().is_some() {
            return;
        }
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
