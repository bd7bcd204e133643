use crate::router::AppState;
use crate::catalog::Catalog;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use tempfile::TempDir;

/// Fresh public directory with one city photo in it. Removed when the
/// returned guard drops.
pub fn make_public_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("cities")).unwrap();
    std::fs::write(
        dir.path().join("cities").join("lisbon-portugal.jpg"),
        b"\xFF\xD8\xFFjpeg",
    )
    .unwrap();
    dir
}

/// App over the builtin catalog and a throwaway public dir. Keep the
/// `TempDir` alive for as long as the app serves files.
pub fn make_app() -> (AppState, TempDir) {
    let dir = make_public_dir();
    (AppState::new(Catalog::builtin(), dir.path()), dir)
}

/// App over the `public/` directory that ships with the crate.
pub fn shipped_app() -> AppState {
    AppState::new(
        Catalog::builtin(),
        concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
    )
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
