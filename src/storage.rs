use crate::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

/// The records kept in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Weights,
    Workouts,
}

impl StoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Weights => "weights",
            StoreKey::Workouts => "workouts",
        }
    }
}

/// Key-value store backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Missing or unreadable records come back as `T::default()`.
    pub async fn load<T>(&self, key: StoreKey) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(err) => {
                    error!("failed to parse {}: {err}", path.display());
                    T::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
            Err(err) => {
                error!("failed to read {}: {err}", path.display());
                T::default()
            }
        }
    }

    pub async fn save<T>(&self, key: StoreKey, value: &T) -> Result<(), AppError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec_pretty(value)?;
        fs::write(self.path_for(key), payload).await?;
        Ok(())
    }
}
