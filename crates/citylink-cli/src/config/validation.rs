use crate::cli::OutputFormat;
use crate::config::CityLinkConfig;
use crate::error::{ConfigError, Result};
use std::path::Path;

impl CityLinkConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        self.input_path()?;

        if self.format == OutputFormat::Json && !self.print_closure && self.route.is_none() {
            return Err(ConfigError::ConflictingOptions(
                "--format json needs --print or --route to have something to report".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// The neighbor table path, or a missing-field error.
    pub fn input_path(&self) -> Result<&Path> {
        self.input.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "input".to_string(),
                hint: "Pass -i <FILE>, set CITYLINK_INPUT, or add \"input\" to citylink.json"
                    .to_string(),
            }
            .into()
        })
    }

    /// Check the route query against a table of `cities` cities.
    pub fn validate_route(&self, cities: usize) -> Result<()> {
        let Some(route) = self.route else {
            return Ok(());
        };

        if route.source >= cities || route.target >= cities {
            let hint = match cities {
                0 => "The neighbor table has no cities".to_string(),
                n => format!("Cities are numbered 0 to {}", n - 1),
            };
            return Err(ConfigError::InvalidValue {
                field: "route".to_string(),
                value: route.to_string(),
                hint,
            }
            .into());
        }

        Ok(())
    }
}
