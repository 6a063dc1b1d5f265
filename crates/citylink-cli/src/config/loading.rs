use crate::cli::Cli;
use crate::config::CityLinkConfig;
use crate::config::conversions::CliOverrides;
use crate::error::{CliError, ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "citylink.json";

/// Environment keys (after the `CITYLINK_` prefix) that map onto config fields.
const ENV_KEYS: &[&str] = &[
    "input",
    "route",
    "print_closure",
    "write_output",
    "output_dir",
    "strategy",
    "self_pairs",
    "format",
];

impl CityLinkConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &Cli) -> Result<Self> {
        Self::figment(args)?.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {} syntax and field types", DEFAULT_CONFIG_FILE),
            }
            .into()
        })
    }

    /// Build the layered provider chain without extracting it.
    pub(crate) fn figment(args: &Cli) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match &args.config {
            Some(path) if !path.exists() => return Err(CliError::FileNotFound(path.clone())),
            Some(path) => Some(path.clone()),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "Merging config file");
            figment = figment.merge(Json::file(path));
        }

        // CITYLINK_PRINT_CLOSURE -> printClosure, etc. Env would lowercase
        // the mapped key again, so that is switched off.
        figment = figment.merge(
            Env::prefixed("CITYLINK_")
                .lowercase(false)
                .only(ENV_KEYS)
                .map(|key| camel_case(key.as_str()).into()),
        );

        // CLI args override everything, but only the ones actually given
        Ok(figment.merge(Serialized::defaults(CliOverrides::from(args))))
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        use crate::config::defaults::*;

        Self {
            input: None,
            route: None,
            print_closure: false,
            write_output: false,
            output_dir: None,
            strategy: default_strategy(),
            self_pairs: default_self_pairs(),
            format: default_format(),
        }
    }
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
