//! Flat-directory file storage for uploaded photos.
//!
//! Files are keyed by their sanitized name (see
//! [`tailbook_core::photos::sanitize_filename`]). The directory is created on
//! the first save. Existing files are never overwritten: a taken name is
//! stored as `<stem>_<n>.<ext>` instead.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tailbook_core::photos::{is_sanitized, numbered_variant};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Upper bound on `_<n>` suffixes tried before giving up on a name.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Handle to the upload directory. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: Arc<PathBuf>,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `data` under `name`, returning the filename actually used.
    ///
    /// `name` must already be sanitized. If it is taken, the first free
    /// numbered variant is used. Files are opened with create-new semantics,
    /// so two concurrent uploads of the same name cannot clobber each other.
    pub async fn save(&self, name: &str, data: &[u8]) -> io::Result<String> {
        if !is_sanitized(name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to store unsanitized filename {name:?}"),
            ));
        }

        tokio::fs::create_dir_all(self.dir.as_path()).await?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = if attempt == 0 {
                name.to_string()
            } else {
                numbered_variant(name, attempt)
            };

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.dir.join(&candidate))
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };

            file.write_all(data).await?;
            file.flush().await?;

            if attempt > 0 {
                tracing::info!(requested = %name, stored = %candidate, "Upload name taken, stored under numbered variant");
            }
            return Ok(candidate);
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free filename for {name:?} after {MAX_NAME_ATTEMPTS} attempts"),
        ))
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, name: &str) -> io::Result<()> {
        let Some(path) = self.resolve(name) else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to remove unsanitized filename {name:?}"),
            ));
        };
        match tokio::fs::remove_file(path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Map a requested filename to its path inside the upload directory.
    ///
    /// Only exact sanitized names resolve; anything containing separators or
    /// other unsafe characters returns `None`. The file may not exist.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        is_sanitized(name).then(|| self.dir.join(name))
    }
}
