//! Owned in-memory handles for locally uploaded images.
//!
//! Reading a file produces a [`Blob`] registered under an [`ObjectUrl`].
//! The blob stays alive until [`ObjectUrlStore::revoke`] is called, so the
//! gallery releases each handle explicitly when an image leaves the list.
//!
//! [`read_upload`] is the only place file bytes are read. It refuses anything
//! but a regular file and caps the size, so it never parks on a FIFO or
//! drains a device node.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::file_name;

/// Opaque reference to a blob held by an [`ObjectUrlStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File contents read at upload time.
#[derive(Clone)]
pub struct Blob {
    path: PathBuf,
    name: String,
    bytes: Arc<[u8]>,
}

impl Blob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Largest file accepted as an upload.
pub const MAX_UPLOAD_BYTES: u64 = 32 * 1024 * 1024;

fn map_open_error(path: &Path, e: std::io::Error) -> CoreError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    }
}

/// Reads an upload source into a [`Blob`], capped at [`MAX_UPLOAD_BYTES`].
pub fn read_upload(path: &Path) -> CoreResult<Blob> {
    read_upload_capped(path, MAX_UPLOAD_BYTES)
}

/// Reads `path` into a [`Blob`] after checking it is a regular file of at
/// most `limit` bytes.
///
/// The type check uses `stat`, which follows symlinks and does not open the
/// file, so a FIFO is rejected before any blocking `open`.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if the file does not exist.
/// - [`CoreError::PermissionDenied`] if the file is not readable.
/// - [`CoreError::NotAFile`] for FIFOs, sockets, devices and directories.
/// - [`CoreError::TooLarge`] if the file is (or grows) past `limit`.
pub fn read_upload_capped(path: &Path, limit: u64) -> CoreResult<Blob> {
    let metadata = std::fs::metadata(path).map_err(|e| map_open_error(path, e))?;
    if !metadata.is_file() {
        return Err(CoreError::NotAFile(path.to_path_buf()));
    }
    if metadata.len() > limit {
        return Err(CoreError::TooLarge {
            size: metadata.len(),
            limit,
        });
    }

    let file = std::fs::File::open(path).map_err(|e| map_open_error(path, e))?;
    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    file.take(limit + 1).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Err(CoreError::TooLarge {
            size: bytes.len() as u64,
            limit,
        });
    }

    Ok(Blob {
        path: path.to_path_buf(),
        name: file_name(path),
        bytes: bytes.into(),
    })
}

/// Registry of live blobs keyed by object URL.
#[derive(Debug, Default)]
pub struct ObjectUrlStore {
    next_id: u64,
    live: HashMap<ObjectUrl, Blob>,
}

impl ObjectUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path` with [`read_upload`] and registers the result.
    pub fn create(&mut self, path: &Path) -> CoreResult<ObjectUrl> {
        let blob = read_upload(path)?;
        Ok(self.insert(blob))
    }

    /// Registers an already-read blob and returns a fresh URL for it.
    pub fn insert(&mut self, blob: Blob) -> ObjectUrl {
        self.next_id += 1;
        let url = ObjectUrl(format!("blob:folio/{}", self.next_id));
        tracing::debug!(%url, path = %blob.path.display(), len = blob.len(), "object url created");
        self.live.insert(url.clone(), blob);
        url
    }

    pub fn get(&self, url: &ObjectUrl) -> Option<&Blob> {
        self.live.get(url)
    }

    /// Releases the blob behind `url`. Returns `false` if it was already gone.
    pub fn revoke(&mut self, url: &ObjectUrl) -> bool {
        let released = self.live.remove(url).is_some();
        if released {
            tracing::debug!(%url, "object url revoked");
        }
        released
    }

    /// Releases every live blob and returns how many were freed.
    pub fn revoke_all(&mut self) -> usize {
        let count = self.live.len();
        self.live.clear();
        count
    }

    /// Number of blobs still held.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
