//! Mapping untrusted request paths onto files under the site root.
//!
//! Resolution runs in two passes. The request path is first percent-decoded,
//! backslashes are treated as separators and `.`/`..` segments are folded;
//! a `..` that would climb above the root rejects the request instead of
//! being clamped. The relative path that survives is then joined through a
//! [`PathBoundary`], which canonicalizes it (following symlinks) and refuses
//! anything that lands outside the root.

use crate::error::{ConfigError, ResolveError};
use std::fmt;
use std::path::{Path, PathBuf};
use strict_path::{PathBoundary, StrictPathError};

/// Marker for paths proven to lie inside the served tree.
pub struct SiteFiles;

/// A filesystem path proven to lie at or below the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
}

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

/// The canonical directory the server is confined to.
#[derive(Clone)]
pub struct SiteRoot {
    dir: PathBuf,
    boundary: PathBoundary<SiteFiles>,
}

impl fmt::Debug for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteRoot").field("dir", &self.dir).finish()
    }
}

impl SiteRoot {
    /// Canonicalize `dir` and make sure it is a directory.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let requested = dir.as_ref();
        let metadata =
            std::fs::metadata(requested).map_err(|source| ConfigError::RootUnavailable {
                path: requested.to_path_buf(),
                source,
            })?;
        if !metadata.is_dir() {
            return Err(ConfigError::RootNotDirectory(requested.to_path_buf()));
        }

        let boundary =
            PathBoundary::try_new(requested).map_err(|source| ConfigError::Boundary {
                path: requested.to_path_buf(),
                source,
            })?;
        let dir = PathBuf::from(boundary.interop_path());
        Ok(Self { dir, boundary })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, request_path: &str) -> Result<ResolvedPath, ResolveError> {
        resolve(request_path, self)
    }
}

/// Resolve `request_path` against `root`.
pub fn resolve(request_path: &str, root: &SiteRoot) -> Result<ResolvedPath, ResolveError> {
    let relative = normalize(request_path)?;
    if relative.as_os_str().is_empty() {
        return Ok(ResolvedPath {
            path: root.dir.clone(),
        });
    }

    let joined = root
        .boundary
        .strict_join(&relative)
        .map_err(|err| match err {
            StrictPathError::PathEscapesBoundary { .. } => {
                ResolveError::Escapes(request_path.to_string())
            }
            other => ResolveError::Unresolvable {
                path: request_path.to_string(),
                reason: other.to_string(),
            },
        })?;
    Ok(ResolvedPath {
        path: PathBuf::from(joined.interop_path()),
    })
}

/// The lexical pass: decode and fold the request path into a relative path
/// with no `.` or `..` components.
pub fn normalize(request_path: &str) -> Result<PathBuf, ResolveError> {
    check_escapes(request_path)?;
    let decoded = urlencoding::decode(request_path).map_err(|_| ResolveError::InvalidUtf8)?;
    if decoded.contains('\0') {
        return Err(ResolveError::NulByte);
    }
    let cleaned = decoded.replace('\\', "/");

    let mut segments: Vec<&str> = Vec::new();
    for segment in cleaned.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(ResolveError::Escapes(request_path.to_string()));
                }
            }
            name => segments.push(name),
        }
    }
    Ok(segments.iter().collect())
}

/// Every `%` must introduce two hex digits.
fn check_escapes(raw: &str) -> Result<(), ResolveError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(ResolveError::Malformed(raw.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
