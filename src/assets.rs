// assets.rs
use crate::errors::ServerError;
use crate::responses::{file_response, ResultResp};
use mime::Mime;
use std::path::{Path, PathBuf};

/// Map a request path onto a file under `public_dir`.
///
/// Only `/<file>` and `/cities/<file>` are served, and the file name must be
/// a plain name with a known extension.
pub fn resolve(public_dir: &Path, request_path: &str) -> Option<(PathBuf, Mime)> {
    let rest = request_path.strip_prefix('/')?;
    let (subdir, file_name) = match rest.split_once('/') {
        Some(("cities", name)) => (Some("cities"), name),
        Some(_) => return None,
        None => (None, rest),
    };

    let valid_name = !file_name.is_empty()
        && !file_name.starts_with('.')
        && file_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid_name {
        return None;
    }

    let mime = mime_for(file_name)?;
    let mut path = public_dir.to_path_buf();
    if let Some(dir) = subdir {
        path.push(dir);
    }
    path.push(file_name);

    Some((path, mime))
}

fn mime_for(file_name: &str) -> Option<Mime> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let mime = match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "png" => mime::IMAGE_PNG,
        "svg" => mime::IMAGE_SVG,
        "css" => mime::TEXT_CSS,
        "ico" => "image/x-icon".parse().ok()?,
        _ => return None,
    };
    Some(mime)
}

pub fn serve(public_dir: &Path, request_path: &str) -> ResultResp {
    let (path, mime) = resolve(public_dir, request_path).ok_or(ServerError::NotFound)?;

    match std::fs::read(&path) {
        Ok(bytes) => file_response(bytes, &mime),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ServerError::NotFound),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read asset");
            Err(ServerError::InternalError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_city_images_and_root_files() {
        let root = Path::new("/srv/public");

        let (path, mime) = resolve(root, "/cities/lisbon-portugal.jpg").unwrap();
        assert_eq!(path, PathBuf::from("/srv/public/cities/lisbon-portugal.jpg"));
        assert_eq!(mime, mime::IMAGE_JPEG);

        let (path, mime) = resolve(root, "/placeholder.svg").unwrap();
        assert_eq!(path, PathBuf::from("/srv/public/placeholder.svg"));
        assert_eq!(mime, mime::IMAGE_SVG);
    }

    #[test]
    fn rejects_traversal_and_unknown_types() {
        let root = Path::new("/srv/public");
        assert!(resolve(root, "/cities/../secret.jpg").is_none());
        assert!(resolve(root, "/../etc/passwd").is_none());
        assert!(resolve(root, "/other/file.jpg").is_none());
        assert!(resolve(root, "/cities/a/b.jpg").is_none());
        assert!(resolve(root, "/script.sh").is_none());
        assert!(resolve(root, "/.hidden.jpg").is_none());
        assert!(resolve(root, "/").is_none());
    }
}
