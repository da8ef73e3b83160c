//! Background work: the public image catalog and uploaded file reads.
//!
//! The manifest is fetched once at startup by [`spawn_catalog_loader`].
//! Each upload is read on the blocking pool by [`spawn_upload_reader`].
//! Results reach the main event loop through unbounded mpsc channels, and
//! cancelling the token on teardown drops any late result.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use folio_core::catalog::{load_catalog, ManifestFetcher, ManifestSource};
use folio_core::error::{CoreError, CoreResult};
use folio_core::gallery::{read_upload, Blob};

/// Messages sent from the catalog task to the main event loop.
#[derive(Debug, PartialEq)]
pub enum CatalogMessage {
    Loaded(Vec<String>),
}

/// Fetches the manifest at `source` and sends the parsed catalog.
///
/// Failures surface as an empty catalog. Nothing is sent once `cancel` has
/// fired, even if the fetch already completed.
pub fn spawn_catalog_loader(
    fetcher: Arc<dyn ManifestFetcher>,
    source: ManifestSource,
    tx: UnboundedSender<CatalogMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(%source, "catalog load cancelled");
            }
            urls = load_catalog(fetcher.as_ref(), &source) => {
                if cancel.is_cancelled() {
                    return;
                }
                let _ = tx.send(CatalogMessage::Loaded(urls));
            }
        }
    })
}

/// Result of reading one uploaded file.
#[derive(Debug)]
pub struct UploadMessage {
    pub path: PathBuf,
    pub result: CoreResult<Blob>,
}

/// Reads `path` on the blocking pool and sends the blob back.
///
/// Nothing is sent once `cancel` has fired.
pub fn spawn_upload_reader(
    path: PathBuf,
    tx: UnboundedSender<UploadMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let read_path = path.clone();
        let result = match tokio::task::spawn_blocking(move || read_upload(&read_path)).await {
            Ok(result) => result,
            Err(e) => Err(CoreError::Io(std::io::Error::other(e))),
        };
        if cancel.is_cancelled() {
            tracing::debug!(path = %path.display(), "upload read dropped after cancel");
            return;
        }
        let _ = tx.send(UploadMessage { path, result });
    })
}
