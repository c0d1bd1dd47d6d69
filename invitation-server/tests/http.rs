use actix_web::dev::ServiceResponse;
use actix_web::http::header::{self, HeaderName};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use invitation_server::handler::serve_static;
use invitation_server::SiteRoot;
use std::path::Path;

const HTML: &str = "text/html; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

fn site_with(files: &[(&str, &[u8])]) -> (tempfile::TempDir, SiteRoot) {
    let temp = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }
    let site = SiteRoot::new(temp.path()).unwrap();
    (temp, site)
}

fn header_of(resp: &ServiceResponse, name: HeaderName) -> Option<&str> {
    resp.headers().get(name).and_then(|value| value.to_str().ok())
}

macro_rules! app {
    ($site:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($site.clone()))
                .default_service(web::to(serve_static)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_serves_index_document() {
    let (_temp, site) = site_with(&[("index.html", b"<h1>You are invited</h1>")]);
    let app = app!(site);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some(HTML));
    assert_eq!(header_of(&resp, header::CACHE_CONTROL), Some("no-store"));
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"<h1>You are invited</h1>");
}

#[actix_web::test]
async fn test_root_without_index_is_not_found() {
    let (_temp, site) = site_with(&[("style.css", b"body{}")]);
    let app = app!(site);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some(PLAIN));
    assert!(header_of(&resp, header::CACHE_CONTROL).is_none());
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Not found");
}

#[actix_web::test]
async fn test_known_extensions_return_exact_bytes() {
    let png: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
    let (_temp, site) = site_with(&[
        ("assets/hero.png", png.as_slice()),
        ("script.js", b"console.log('hi');"),
        ("data/Venue.JSON", b"{\"lat\":46.2}"),
    ]);
    let app = app!(site);

    let cases: [(&str, &str, &[u8]); 3] = [
        ("/assets/hero.png", "image/png", png.as_slice()),
        (
            "/script.js",
            "text/javascript; charset=utf-8",
            b"console.log('hi');",
        ),
        (
            "/data/Venue.JSON",
            "application/json; charset=utf-8",
            b"{\"lat\":46.2}",
        ),
    ];
    for (uri, content_type, expected) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some(content_type));
        assert_eq!(header_of(&resp, header::CACHE_CONTROL), Some("no-store"));
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], expected, "{uri}");
    }
}

#[actix_web::test]
async fn test_unknown_extension_is_octet_stream() {
    let (_temp, site) = site_with(&[("assets/opening-envelope.gif", b"GIF89a")]);
    let app = app!(site);

    let req = test::TestRequest::get()
        .uri("/assets/opening-envelope.gif")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        header_of(&resp, header::CONTENT_TYPE),
        Some("application/octet-stream")
    );
}

#[actix_web::test]
async fn test_directory_index_fallback() {
    let (temp, site) = site_with(&[("faq/index.html", b"<h2>FAQ</h2>")]);
    std::fs::create_dir(temp.path().join("photos")).unwrap();
    let app = app!(site);

    for uri in ["/faq", "/faq/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some(HTML));
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"<h2>FAQ</h2>");
    }

    let req = test::TestRequest::get().uri("/photos/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_file_used_as_directory_is_not_found() {
    let (_temp, site) = site_with(&[("style.css", b"body{}")]);
    let app = app!(site);

    let req = test::TestRequest::get().uri("/style.css/extra").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Not found");
}

#[actix_web::test]
async fn test_traversal_is_bad_request() {
    let (_temp, site) = site_with(&[("index.html", b"ok")]);
    let app = app!(site);

    for uri in [
        "/../../etc/passwd",
        "/%2e%2e/%2e%2e/etc/passwd",
        "/..%2Foutside-secret.txt",
        "/..%5Coutside-secret.txt",
        "/assets/../../outside-secret.txt",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some(PLAIN));
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Bad request");
    }
}

#[cfg(unix)]
#[actix_web::test]
async fn test_symlink_out_of_root_is_bad_request() {
    let outside = tempfile::tempdir().unwrap();
    std::fs::write(outside.path().join("secret.txt"), b"TOP SECRET").unwrap();

    let (temp, site) = site_with(&[("index.html", b"ok")]);
    std::os::unix::fs::symlink(outside.path(), temp.path().join("link")).unwrap();
    let app = app!(site);

    let req = test::TestRequest::get().uri("/link/secret.txt").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Bad request");
}

#[cfg(unix)]
#[actix_web::test]
async fn test_read_failure_is_server_error() {
    let (temp, site) = site_with(&[("index.html", b"ok")]);
    let socket = temp.path().join("rsvp.sock");
    let _listener = std::os::unix::net::UnixListener::bind(&socket).unwrap();
    let app = app!(site);

    let req = test::TestRequest::get().uri("/rsvp.sock").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some(PLAIN));
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Server error");
}

#[actix_web::test]
async fn test_malformed_encoding_is_bad_request() {
    let (_temp, site) = site_with(&[("index.html", b"ok")]);
    let app = app!(site);

    for uri in ["/%zz", "/%FF%FE.html", "/index.html%00"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn test_query_string_and_method_are_ignored() {
    let (_temp, site) = site_with(&[("style.css", b"body{margin:0}")]);
    let app = app!(site);

    let req = test::TestRequest::get().uri("/style.css?v=3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        header_of(&resp, header::CONTENT_TYPE),
        Some("text/css; charset=utf-8")
    );

    let req = test::TestRequest::post()
        .uri("/style.css")
        .set_payload("ignored")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"body{margin:0}");
}

#[actix_web::test]
async fn test_encoded_names_are_decoded() {
    let (_temp, site) = site_with(&[("photos/our day.jpg", b"\xff\xd8\xff")]);
    let app = app!(site);

    let req = test::TestRequest::get()
        .uri("/photos/our%20day.jpg")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_of(&resp, header::CONTENT_TYPE), Some("image/jpeg"));
}

#[actix_web::test]
async fn test_site_root_is_canonical() {
    let (temp, site) = site_with(&[]);
    let dotted = temp.path().join(".");
    let again = SiteRoot::new(&dotted).unwrap();
    assert_eq!(site.dir(), again.dir());
    assert!(Path::new(site.dir()).is_absolute());
}
