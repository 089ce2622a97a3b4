use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable overriding the application root.
pub const HOME_ENV: &str = "HEARTWELL_HOME";

pub struct PortablePathManager;

impl PortablePathManager {
    /// Application root: `HEARTWELL_HOME` if set, otherwise the current directory.
    pub fn root_dir() -> PathBuf {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(home);
        }

        match std::env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                warn!("Failed to get current directory: {}. Falling back to '.'", e);
                PathBuf::from(".")
            }
        }
    }

    /// Main data directory (./data).
    pub fn data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    /// Exported chat transcripts (./data/transcripts).
    pub fn transcripts_dir() -> PathBuf {
        Self::data_dir().join("transcripts")
    }

    /// Default session secrets file (./data/secrets.env).
    pub fn secrets_path() -> PathBuf {
        Self::data_dir().join("secrets.env")
    }

    /// Creates the data and transcripts directories if they don't exist.
    pub fn init() -> Result<(), std::io::Error> {
        for dir in [Self::data_dir(), Self::transcripts_dir()] {
            if !dir.exists() {
                info!("Creating directory: {:?}", dir);
                fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_home_override() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        temp_env::with_var(HOME_ENV, Some(dir.path()), || {
            assert_eq!(PortablePathManager::data_dir(), dir.path().join("data"));
            assert_eq!(
                PortablePathManager::transcripts_dir(),
                dir.path().join("data").join("transcripts")
            );
            assert_eq!(
                PortablePathManager::secrets_path(),
                dir.path().join("data").join("secrets.env")
            );

            PortablePathManager::init().expect("init should create directories");
            assert!(PortablePathManager::transcripts_dir().is_dir());
        });
    }
}
