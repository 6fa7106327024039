use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Optional config file read from the working directory.
pub const CONFIG_FILE: &str = "medicare.toml";

/// Runtime configuration.
///
/// Sources, lowest precedence first: built-in defaults, `medicare.toml`,
/// then `MEDICARE_*` environment variables (`__` separates nested keys,
/// e.g. `MEDICARE_SITE__PATIENTS=20000`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub seed_demo_data: bool,
    pub asset_version: String,
    pub site: SiteConfig,
}

/// Marketing figures and image fallbacks shown on public pages.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub patients: u32,
    pub years: u32,
    pub awards: u32,
    pub doctor_placeholder: String,
    pub patient_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:medicare.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            seed_demo_data: true,
            asset_version: "1".to_string(),
            site: SiteConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            patients: 15000,
            years: 15,
            awards: 8,
            doctor_placeholder: "/images/doctor-placeholder.jpg".to_string(),
            patient_placeholder: "/images/patient-placeholder.jpg".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("MEDICARE_").split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: failed to load medicare configuration"));

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn env_overrides_nested_site_values() {
        Jail::expect_with(|jail| {
            jail.set_env("MEDICARE_LISTEN_ADDR", "127.0.0.1:9000");
            jail.set_env("MEDICARE_SITE__PATIENTS", "20000");
            let cfg = Config::load()?;
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.site.patients, 20000);
            assert_eq!(cfg.site.years, 15);
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_layered_under_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                seed_demo_data = false
                loglevel = "debug"
                "#,
            )?;
            jail.set_env("MEDICARE_LOGLEVEL", "warn");
            let cfg = Config::load()?;
            assert!(!cfg.seed_demo_data);
            assert_eq!(cfg.loglevel, "warn");
            Ok(())
        });
    }
}
