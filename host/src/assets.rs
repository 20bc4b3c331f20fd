//! Serves the embedded frontend bundle.
//!
//! Unknown paths fall back to `index.html` so client-side routes resolve.
//! With no bundle embedded every request answers 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub fn has_bundle() -> bool {
    STATIC_DIR.get_file(INDEX).is_some()
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

/// Maps a request path to a file name inside the bundle.
fn resolve_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.ends_with('/') {
        INDEX
    } else {
        path
    }
}

fn respond(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let file_path = resolve_path(path);

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => {
                debug!("{path} not in bundle, serving {INDEX}");
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header::CONTENT_TYPE, StatusCode};

    static SITE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/site");
    static NO_SITE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/site/assets");

    fn content_type(resp: &HttpResponse) -> String {
        resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn root_and_directories_map_to_index() {
        assert_eq!(resolve_path("/"), "index.html");
        assert_eq!(resolve_path(""), "index.html");
        assert_eq!(resolve_path("/places/"), "index.html");
        assert_eq!(resolve_path("/assets/app.js"), "assets/app.js");
    }

    #[test]
    fn serves_files_with_guessed_mime() {
        let resp = respond(&SITE, "/assets/app.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).contains("javascript"));

        let resp = respond(&SITE, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[test]
    fn unknown_paths_fall_back_to_index() {
        let resp = respond(&SITE, "/places/42");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/html; charset=utf-8");
    }

    #[test]
    fn missing_bundle_is_not_found() {
        let resp = respond(&NO_SITE, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
