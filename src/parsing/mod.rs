pub mod config;

use config::{Config, TOMLConfig};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::info;

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    info!("loading config at {}", filepath.to_string_lossy());
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;

    let mut settings: TOMLConfig = toml::from_str(&input)
        .with_context(|| format!("couldn't parse {}", filepath.display()))?;
    if settings.render_settings.threads.is_none() {
        settings.render_settings.threads = Some(num_cpus::get() as u16);
    }
    Ok(settings)
}

pub fn load_config(filepath: impl AsRef<Path>) -> anyhow::Result<Config> {
    let settings = get_settings(filepath)?;
    Config::try_from(settings)
}
