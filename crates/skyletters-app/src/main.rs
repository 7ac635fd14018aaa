use std::path::{Path, PathBuf};

use skyletters_core::{ConfigError, SceneConfig};
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyletters_ui::run;

const CONFIG_ENV: &str = "SKYLETTERS_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "skyletters.toml";

fn main() {
    // Init logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(filter)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Skyletters starting");
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Skyletters config error: {e}");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(config) {
        error!("Skyletters error: {e}");
        std::process::exit(1);
    }
}

/// `$SKYLETTERS_CONFIG`, else `./skyletters.toml` if present, else defaults.
fn load_config() -> Result<SceneConfig, ConfigError> {
    match config_path(std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
        Some(path) => SceneConfig::load(&path),
        None => {
            info!("no config file, using built-in defaults");
            Ok(SceneConfig::default())
        }
    }
}

fn config_path(from_env: Option<PathBuf>) -> Option<PathBuf> {
    from_env.or_else(|| {
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        fallback.is_file().then(|| fallback.to_path_buf())
    })
}
