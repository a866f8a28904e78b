//! `.env` discovery for the API credential.
//!
//! The credential normally comes from the process environment. When it is
//! missing, a `.env` file is looked up in the working directory and up to
//! two of its parents; the first one found is loaded.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use unobot_common::defaults::API_KEY_VAR;

/// Candidate `.env` locations for a working directory, nearest first.
pub fn default_env_candidates(cwd: &Path) -> Vec<PathBuf> {
    cwd.ancestors().take(3).map(|dir| dir.join(".env")).collect()
}

/// Return the first candidate that exists as a file.
pub fn resolve_env_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// The API key from the environment, if set and non-empty.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Load a `.env` file when the API key is not already in the environment.
///
/// Variables already present in the environment are never overridden.
/// Returns the path of the file that was loaded, if any.
pub fn load_env_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    if api_key_from_env().is_some() {
        debug!("{API_KEY_VAR} already set, skipping .env discovery");
        return None;
    }

    load_from(resolve_env_file(candidates)?)
}

fn load_from(path: PathBuf) -> Option<PathBuf> {
    match dotenvy::from_path(&path) {
        Ok(()) => {
            info!("loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) => {
            warn!("failed to load {}: {e}", path.display());
            None
        }
    }
}
