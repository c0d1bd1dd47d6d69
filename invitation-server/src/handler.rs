//! The single catch-all route.

use crate::error::{ResolveError, ServeError, ServerError};
use crate::resolve::SiteRoot;
use crate::serve::serve;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

const ROOT_DOCUMENT: &str = "/index.html";

/// Map the request path to a file under the site root. Method, query string
/// and body are ignored.
pub async fn serve_static(
    req: HttpRequest,
    site: web::Data<SiteRoot>,
) -> Result<HttpResponse, ServerError> {
    let path = match req.path() {
        "/" => ROOT_DOCUMENT,
        other => other,
    };

    let resolved = site.resolve(path).inspect_err(|err| match err {
        ResolveError::Unresolvable { .. } => log::debug!("{err}"),
        _ => log::warn!("Rejected request path {:?}: {}", req.path(), err),
    })?;

    let file = serve(&resolved).await.inspect_err(|err| match err {
        ServeError::NotFound(_) => log::debug!("{err}"),
        ServeError::Read { .. } => log::error!("{err}"),
    })?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, file.content_type))
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(file.bytes))
}
