//! Loading resolved paths from disk.

use crate::error::ServeError;
use crate::mime;
use crate::resolve::ResolvedPath;
use std::io::ErrorKind;
use std::path::Path;

/// Default document looked up inside directories.
pub const INDEX_DOCUMENT: &str = "index.html";

/// A file read fully into memory, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Read the file behind `resolved`, falling back to the directory index.
pub async fn serve(resolved: &ResolvedPath) -> Result<StaticFile, ServeError> {
    let path = resolved.as_path();
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| ServeError::NotFound(path.to_path_buf()))?;

    if metadata.is_dir() {
        let index = path.join(INDEX_DOCUMENT);
        match tokio::fs::metadata(&index).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(ServeError::NotFound(index)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ServeError::NotFound(index));
            }
            Err(source) => {
                return Err(ServeError::Read {
                    path: index,
                    source,
                });
            }
        }
        let bytes = read(&index).await?;
        return Ok(StaticFile {
            content_type: mime::HTML,
            bytes,
        });
    }

    let bytes = read(path).await?;
    Ok(StaticFile {
        content_type: mime::content_type_for(path),
        bytes,
    })
}

async fn read(path: &Path) -> Result<Vec<u8>, ServeError> {
    tokio::fs::read(path).await.map_err(|source| ServeError::Read {
        path: path.to_path_buf(),
        source,
    })
}
