use super::Config;
use crate::error::SynsetError;
use config::{Config as ConfigBuilder, Environment, Map};
use std::path::Path;

pub const ENV_PREFIX: &str = "SYNFETCH";

/// Layers built-in defaults, an optional config file and `SYNFETCH__*` environment variables.
pub fn load_config(config_path: Option<&Path>) -> Result<Config, SynsetError> {
    load_config_with_env(config_path, None)
}

/// `env` replaces the process environment as the source of `SYNFETCH__*` variables.
fn load_config_with_env(
    config_path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<Config, SynsetError> {
    let defaults = ConfigBuilder::try_from(&Config::default())?;
    let mut builder = ConfigBuilder::builder().add_source(defaults);

    if let Some(config_path) = config_path {
        builder = builder.add_source(config::File::from(config_path).required(true));
    }

    let config_builder = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("download.unavailable_image_urls")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
