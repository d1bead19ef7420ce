use std::ffi::OsString;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

pub const DATA_ENV_VAR: &str = "SPENDLENS_DATA";
pub const ADDR_ENV_VAR: &str = "SPENDLENS_ADDR";
pub const DEFAULT_DATA_PATH: &str = "data/sample_transactions.json";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

/// Data file location: explicit override, then `SPENDLENS_DATA`, then the
/// bundled sample file under the working directory.
pub fn resolve_data_path(path_override: Option<&Path>) -> ClientResult<PathBuf> {
    resolve_data_path_from(path_override, std::env::var_os(DATA_ENV_VAR))
}

pub fn resolve_listen_addr(addr_override: Option<&str>) -> ClientResult<SocketAddr> {
    let from_env = std::env::var(ADDR_ENV_VAR).ok();
    resolve_listen_addr_from(addr_override, from_env.as_deref())
}

fn resolve_data_path_from(
    path_override: Option<&Path>,
    env_value: Option<OsString>,
) -> ClientResult<PathBuf> {
    let candidate = match path_override {
        Some(path) => path.to_path_buf(),
        None => match env_value {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => PathBuf::from(DEFAULT_DATA_PATH),
        },
    };

    absolutize(&candidate)
}

fn resolve_listen_addr_from(
    addr_override: Option<&str>,
    env_value: Option<&str>,
) -> ClientResult<SocketAddr> {
    let raw = addr_override
        .or(env_value.filter(|value| !value.trim().is_empty()))
        .unwrap_or(DEFAULT_LISTEN_ADDR);

    raw.trim().parse::<SocketAddr>().map_err(|_| {
        ClientError::invalid_argument(&format!(
            "Listen address `{raw}` must look like `127.0.0.1:8787`."
        ))
    })
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::data_load_failed(path, &error.to_string()))
}
