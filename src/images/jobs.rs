// images/jobs.rs
use crate::catalog::Catalog;
use crate::domain::City;
use crate::images::pipeline::ImageJob;
use crate::images::ImageError;
use std::path::Path;

/// Queries for the landing page hero images, saved as `hero-<n>.jpg`.
pub const HERO_QUERIES: [&str; 3] = [
    "digital nomad working laptop cafe view",
    "remote work tropical beach laptop",
    "coworking space modern bright",
];

/// Cities whose first search result was a poor fit, with hand-picked terms.
pub const RETOUCH: [(&str, &str); 3] = [
    (
        "buenos-aires-argentina",
        "Buenos Aires Argentina downtown skyline day",
    ),
    (
        "playa-del-carmen-mexico",
        "Playa del Carmen Mexico city street downtown",
    ),
    (
        "montevideo-uruguay",
        "Montevideo Uruguay downtown cityscape close",
    ),
];

pub const DEFAULT_FIX_PAGE: u32 = 2;

fn city_query(city: &City) -> String {
    format!("{} {} cityscape", city.name, city.country)
}

fn city_dest(dir: &Path, city: &City) -> std::path::PathBuf {
    dir.join(format!("{}.jpg", city.id))
}

/// One job per catalog city.
pub fn city_jobs(catalog: &Catalog, dir: &Path, overwrite: bool) -> Vec<ImageJob> {
    catalog
        .all()
        .iter()
        .map(|city| ImageJob {
            label: city.name.to_string(),
            query: city_query(city),
            fallback_query: Some(format!("{} city", city.name)),
            page: 1,
            dest: city_dest(dir, city),
            overwrite,
        })
        .collect()
}

pub fn hero_jobs(dir: &Path) -> Vec<ImageJob> {
    HERO_QUERIES
        .iter()
        .enumerate()
        .map(|(i, query)| {
            let file_name = format!("hero-{}.jpg", i + 1);
            ImageJob {
                label: file_name.clone(),
                query: query.to_string(),
                fallback_query: None,
                page: 1,
                dest: dir.join(file_name),
                overwrite: true,
            }
        })
        .collect()
}

pub fn retouch_jobs(catalog: &Catalog, dir: &Path) -> Result<Vec<ImageJob>, ImageError> {
    RETOUCH
        .iter()
        .map(|(id, query)| -> Result<ImageJob, ImageError> {
            let city = catalog
                .get(id)
                .ok_or_else(|| ImageError::UnknownCity(id.to_string()))?;
            Ok(ImageJob {
                label: city.name.to_string(),
                query: query.to_string(),
                fallback_query: None,
                page: 1,
                dest: city_dest(dir, city),
                overwrite: true,
            })
        })
        .collect()
}

/// Re-fetch a single city's photo, by default taking the second search result.
pub fn fix_job(
    catalog: &Catalog,
    id: &str,
    query: Option<String>,
    page: Option<u32>,
    dir: &Path,
) -> Result<ImageJob, ImageError> {
    let city = catalog
        .get(id)
        .ok_or_else(|| ImageError::UnknownCity(id.to_string()))?;

    Ok(ImageJob {
        label: city.name.to_string(),
        query: query.unwrap_or_else(|| city_query(city)),
        fallback_query: None,
        page: page.unwrap_or(DEFAULT_FIX_PAGE).max(1),
        dest: city_dest(dir, city),
        overwrite: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn city_jobs_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let jobs = city_jobs(&catalog, Path::new("public/cities"), false);

        assert_eq!(jobs.len(), catalog.len());
        let first = &catalog.all()[0];
        assert_eq!(jobs[0].label, first.name);
        assert_eq!(jobs[0].query, format!("{} {} cityscape", first.name, first.country));
        assert_eq!(jobs[0].fallback_query, Some(format!("{} city", first.name)));
        assert_eq!(jobs[0].dest, PathBuf::from(format!("public/cities/{}.jpg", first.id)));
        assert!(jobs.iter().all(|j| !j.overwrite));
    }

    #[test]
    fn retouch_list_refers_to_known_cities() {
        let jobs = retouch_jobs(&Catalog::builtin(), Path::new("out")).unwrap();
        assert_eq!(jobs.len(), RETOUCH.len());
        assert_eq!(jobs[2].label, "Montevideo");
        assert_eq!(jobs[2].dest, PathBuf::from("out/montevideo-uruguay.jpg"));
    }

    #[test]
    fn hero_jobs_are_numbered_from_one() {
        let jobs = hero_jobs(Path::new("public"));
        let names: Vec<_> = jobs.iter().map(|j| j.label.as_str()).collect();
        assert_eq!(names, vec!["hero-1.jpg", "hero-2.jpg", "hero-3.jpg"]);
    }

    #[test]
    fn fix_job_defaults_to_second_result() {
        let catalog = Catalog::builtin();
        let job = fix_job(&catalog, "montevideo-uruguay", None, None, Path::new("c")).unwrap();
        assert_eq!(job.page, 2);
        assert_eq!(job.query, "Montevideo Uruguay cityscape");

        let job = fix_job(
            &catalog,
            "montevideo-uruguay",
            Some("Montevideo Uruguay cityscape buildings".into()),
            Some(0),
            Path::new("c"),
        )
        .unwrap();
        assert_eq!(job.page, 1);
        assert_eq!(job.query, "Montevideo Uruguay cityscape buildings");

        assert!(matches!(
            fix_job(&catalog, "atlantis", None, None, Path::new("c")),
            Err(ImageError::UnknownCity(_))
        ));
    }
}
