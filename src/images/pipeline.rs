// images/pipeline.rs
use crate::images::ImageError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Something that can find a photo for a query and save it locally.
pub trait ImageSource {
    /// Returns the URL of the first result on `page` (1-based).
    fn search(&self, query: &str, page: u32) -> Result<String, ImageError>;

    /// Saves the image at `url` to `dest`, returning the number of bytes written.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, ImageError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub label: String,
    pub query: String,
    /// Broader query tried once if the primary one fails.
    pub fallback_query: Option<String>,
    pub page: u32,
    pub dest: PathBuf,
    /// When false an existing file at `dest` is left alone.
    pub overwrite: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub skipped: Vec<String>,
    /// Label and the last error message.
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// In-progress download for `dest`, e.g. `lisbon-portugal.jpg.part`.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Streams `reader` into the partial file next to `dest`, then renames it
/// over `dest`. On error the partial file is removed and `dest` is untouched.
pub fn persist<R: Read>(mut reader: R, dest: &Path) -> Result<u64, ImageError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let partial = partial_path(dest);
    let written = fs::File::create(&partial).and_then(|mut file| io::copy(&mut reader, &mut file));

    match written {
        Ok(bytes) => {
            fs::rename(&partial, dest)?;
            Ok(bytes)
        }
        Err(e) => {
            let _ = fs::remove_file(&partial);
            Err(e.into())
        }
    }
}

fn fetch<S: ImageSource + ?Sized>(
    source: &S,
    query: &str,
    page: u32,
    dest: &Path,
) -> Result<u64, ImageError> {
    let url = source.search(query, page)?;
    source.download(&url, dest)
}

/// Runs jobs one after another, pausing `delay` between jobs that hit the
/// network. A failing job is logged and recorded; the batch always runs to
/// the end.
pub fn run_batch<S: ImageSource + ?Sized>(
    source: &S,
    jobs: &[ImageJob],
    delay: Duration,
) -> BatchReport {
    let mut report = BatchReport::default();
    let total = jobs.len();

    for (i, job) in jobs.iter().enumerate() {
        let progress = format!("[{}/{}]", i + 1, total);

        if !job.overwrite && job.dest.exists() {
            tracing::info!(%progress, label = %job.label, "already downloaded, skipping");
            report.skipped.push(job.label.clone());
            continue;
        }

        tracing::info!(%progress, label = %job.label, query = %job.query, "searching");

        let result = match (fetch(source, &job.query, job.page, &job.dest), &job.fallback_query) {
            (Err(e), Some(fallback)) => {
                tracing::warn!(%progress, label = %job.label, error = %e, "failed, retrying with broader query");
                fetch(source, fallback, 1, &job.dest)
            }
            (result, _) => result,
        };

        match result {
            Ok(bytes) => {
                tracing::info!(%progress, label = %job.label, bytes, dest = %job.dest.display(), "downloaded");
                report.succeeded.push(job.label.clone());
            }
            Err(e) => {
                tracing::error!(%progress, label = %job.label, error = %e, "giving up");
                report.failed.push((job.label.clone(), e.to_string()));
            }
        }

        if i + 1 < total && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    tracing::info!(
        succeeded = report.succeeded.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "batch finished"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::time::Instant;
    use tempfile::TempDir;

    /// Answers every query except the ones listed in `no_results`, and
    /// records each call.
    #[derive(Default)]
    struct FakeSource {
        no_results: HashSet<&'static str>,
        searches: RefCell<Vec<(String, u32)>>,
        searched_at: RefCell<Vec<Instant>>,
        downloads: RefCell<Vec<PathBuf>>,
    }

    impl ImageSource for FakeSource {
        fn search(&self, query: &str, page: u32) -> Result<String, ImageError> {
            self.searches.borrow_mut().push((query.to_string(), page));
            self.searched_at.borrow_mut().push(Instant::now());
            if self.no_results.contains(query) {
                return Err(ImageError::NoResults(query.to_string()));
            }
            Ok(format!("https://img.test/{}", query.replace(' ', "-")))
        }

        fn download(&self, url: &str, dest: &Path) -> Result<u64, ImageError> {
            self.downloads.borrow_mut().push(dest.to_path_buf());
            persist(url.as_bytes(), dest)
        }
    }

    /// Yields a few bytes, then fails like a dropped connection.
    struct BrokenStream {
        sent: bool,
    }

    impl Read for BrokenStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.sent = true;
            let n = buf.len().min(4);
            buf[..n].copy_from_slice(&b"half"[..n]);
            Ok(n)
        }
    }

    fn job(label: &str, query: &str, fallback: Option<&str>, dest: PathBuf) -> ImageJob {
        ImageJob {
            label: label.to_string(),
            query: query.to_string(),
            fallback_query: fallback.map(str::to_string),
            page: 1,
            dest,
            overwrite: true,
        }
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        let source = FakeSource {
            no_results: HashSet::from(["nowhere cityscape"]),
            ..Default::default()
        };

        let jobs = vec![
            job("First", "first cityscape", None, dir.path().join("first.jpg")),
            job("Nowhere", "nowhere cityscape", None, dir.path().join("nowhere.jpg")),
            job("Last", "last cityscape", None, dir.path().join("last.jpg")),
        ];

        let report = run_batch(&source, &jobs, Duration::ZERO);

        assert_eq!(report.succeeded, vec!["First", "Last"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "Nowhere");
        assert!(!report.is_success());
        assert!(dir.path().join("first.jpg").exists());
        assert!(!dir.path().join("nowhere.jpg").exists());
        assert!(dir.path().join("last.jpg").exists());
    }

    #[test]
    fn fallback_query_is_tried_on_first_page() {
        let dir = TempDir::new().unwrap();
        let source = FakeSource {
            no_results: HashSet::from(["tiny town cityscape"]),
            ..Default::default()
        };
        let mut j = job(
            "Tiny Town",
            "tiny town cityscape",
            Some("tiny town city"),
            dir.path().join("tiny.jpg"),
        );
        j.page = 3;

        let report = run_batch(&source, &[j], Duration::ZERO);

        assert_eq!(report.succeeded, vec!["Tiny Town"]);
        assert_eq!(
            *source.searches.borrow(),
            vec![
                ("tiny town cityscape".to_string(), 3),
                ("tiny town city".to_string(), 1)
            ]
        );
        let saved = std::fs::read_to_string(dir.path().join("tiny.jpg")).unwrap();
        assert_eq!(saved, "https://img.test/tiny-town-city");
    }

    #[test]
    fn existing_files_are_skipped_unless_overwriting() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("kept.jpg");
        std::fs::write(&dest, b"old").unwrap();

        let source = FakeSource::default();
        let mut j = job("Kept", "kept cityscape", None, dest.clone());
        j.overwrite = false;

        let report = run_batch(&source, &[j.clone()], Duration::ZERO);
        assert_eq!(report.skipped, vec!["Kept"]);
        assert!(source.searches.borrow().is_empty());
        assert_eq!(std::fs::read(&dest).unwrap(), b"old");

        j.overwrite = true;
        let report = run_batch(&source, &[j], Duration::ZERO);
        assert_eq!(report.succeeded, vec!["Kept"]);
        assert_ne!(std::fs::read(&dest).unwrap(), b"old");
    }

    #[test]
    fn persist_replaces_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("photos").join("lisbon-portugal.jpg");

        assert_eq!(persist(&b"first"[..], &dest).unwrap(), 5);
        assert_eq!(persist(&b"second"[..], &dest).unwrap(), 6);

        assert_eq!(std::fs::read(&dest).unwrap(), b"second");
        assert!(!partial_path(&dest).exists());
    }

    #[test]
    fn interrupted_download_keeps_existing_photo() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("lisbon-portugal.jpg");
        std::fs::write(&dest, b"old photo").unwrap();

        let err = persist(BrokenStream { sent: false }, &dest).unwrap_err();

        assert!(matches!(err, ImageError::Io(_)));
        assert_eq!(std::fs::read(&dest).unwrap(), b"old photo");
        assert!(!partial_path(&dest).exists());
    }

    #[test]
    fn partial_path_keeps_the_extension() {
        assert_eq!(
            partial_path(Path::new("public/cities/lisbon-portugal.jpg")),
            PathBuf::from("public/cities/lisbon-portugal.jpg.part")
        );
    }

    #[test]
    fn pauses_between_jobs_but_not_after_the_last() {
        let dir = TempDir::new().unwrap();
        let source = FakeSource::default();
        let delay = Duration::from_millis(150);

        let jobs = vec![
            job("One", "one cityscape", None, dir.path().join("one.jpg")),
            job("Two", "two cityscape", None, dir.path().join("two.jpg")),
            job("Three", "three cityscape", None, dir.path().join("three.jpg")),
        ];

        let report = run_batch(&source, &jobs, delay);
        let finished = Instant::now();

        assert_eq!(report.succeeded.len(), 3);
        let searched_at = source.searched_at.borrow();
        assert_eq!(searched_at.len(), 3);
        for pair in searched_at.windows(2) {
            assert!(pair[1] - pair[0] >= delay, "jobs ran without a pause");
        }
        let last = searched_at[2];
        assert!(finished - last < delay, "slept after the last job");
    }

    #[test]
    fn skipped_jobs_do_not_pause() {
        let dir = TempDir::new().unwrap();
        let kept = dir.path().join("kept.jpg");
        std::fs::write(&kept, b"old").unwrap();

        let mut skipped = job("Kept", "kept cityscape", None, kept);
        skipped.overwrite = false;
        let jobs = vec![
            skipped.clone(),
            skipped,
            job("New", "new cityscape", None, dir.path().join("new.jpg")),
        ];

        let started = Instant::now();
        let report = run_batch(&FakeSource::default(), &jobs, Duration::from_secs(5));

        assert_eq!(report.skipped, vec!["Kept", "Kept"]);
        assert_eq!(report.succeeded, vec!["New"]);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
