//! Where exported stills and animations end up.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use tokio::task::JoinHandle;
use tracing::info;

use crate::codec::EncodedAsset;
use crate::error::Result;

/// Destination for exported assets.
///
/// Saving is fire-and-forget from the editor's point of view: the sink gets
/// the asset and a suggested file name and does whatever "download" means
/// for its host.
pub trait ExportSink: Send + Sync {
    fn save(&self, asset: &EncodedAsset, file_name: &str) -> Result<()>;
}

/// Writes exports into a directory.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target path for a suggested name. Only the final path component of
    /// the name is used, so exports always land inside the directory.
    pub fn path_for(&self, file_name: &str) -> Option<PathBuf> {
        Path::new(file_name).file_name().map(|name| self.dir.join(name))
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, asset: &EncodedAsset, file_name: &str) -> Result<()> {
        let path = self.path_for(file_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a file name: {file_name:?}"),
            )
        })?;
        std::fs::write(&path, asset.bytes())?;
        info!(path = %path.display(), bytes = asset.len(), mime = asset.mime(), "export saved");
        Ok(())
    }
}

/// A background export that has been started but may not have finished.
///
/// Exports cannot be cancelled; dropping the job lets it run to completion.
pub struct ExportJob {
    handle: JoinHandle<Result<EncodedAsset>>,
}

impl ExportJob {
    pub(crate) fn spawn<F>(export: F) -> Self
    where
        F: Future<Output = Result<EncodedAsset>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(export),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the export to be encoded and handed to the sink.
    pub async fn finished(self) -> Result<EncodedAsset> {
        self.handle.await?
    }
}
