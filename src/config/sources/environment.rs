//! Environment variable source: TORVIEW__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses TORVIEW prefix and __ as separator for nested keys,
/// e.g. `TORVIEW__DISPLAY__SORT_KEY=size`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TORVIEW")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
