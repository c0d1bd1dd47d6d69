//! Static file server for the invitation site.
//!
//! Every request path is folded lexically, then canonicalized against a
//! single root directory and answered with the file's bytes, the directory's
//! `index.html`, or a plain-text 400/404/500. Nothing outside the root is
//! ever read, including through symlinks.

pub mod config;
pub mod error;
pub mod handler;
pub mod mime;
pub mod resolve;
pub mod serve;

pub use config::ServerConfig;
pub use error::{ResolveError, ServeError, ServerError};
pub use resolve::{normalize, resolve, ResolvedPath, SiteRoot};
pub use serve::{serve, StaticFile};
