use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    error::OutputError,
    types::{ResolvedTrack, TrackRequest},
    utils,
};

pub const DATA_FILE_SUFFIX: &str = "_data.json";
pub const NOT_FOUND_FILE_SUFFIX: &str = "_not_found.json";

/// Writes the result files of one resolution run.
///
/// Both files live directly in the output directory and are named after the
/// playlist title: `<title>_data.json` holds the matched tracks keyed by
/// track id, `<title>_not_found.json` the requests nothing matched.
pub struct OutputManager {
    dir: PathBuf,
    title: String,
}

impl OutputManager {
    pub fn new(dir: impl Into<PathBuf>, title: &str) -> Self {
        Self {
            dir: dir.into(),
            title: utils::sanitize_title(title),
        }
    }

    pub async fn persist_resolved(
        &self,
        tracks: &HashMap<String, ResolvedTrack>,
    ) -> Result<PathBuf, OutputError> {
        let path = self.data_path();
        Self::write_json(&path, tracks).await?;
        Ok(path)
    }

    pub async fn persist_not_found(
        &self,
        requests: &[TrackRequest],
    ) -> Result<PathBuf, OutputError> {
        let path = self.not_found_path();
        Self::write_json(&path, requests).await?;
        Ok(path)
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.join(format!("{}{DATA_FILE_SUFFIX}", self.title))
    }

    pub fn not_found_path(&self) -> PathBuf {
        self.dir.join(format!("{}{NOT_FOUND_FILE_SUFFIX}", self.title))
    }

    async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(value)?;
        async_fs::write(path, json).await?;
        Ok(())
    }
}
