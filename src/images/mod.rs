mod image_error;
mod jobs;
mod models;
mod pipeline;
mod unsplash;

pub use image_error::ImageError;
pub use jobs::{city_jobs, fix_job, hero_jobs, retouch_jobs};
pub use pipeline::run_batch;
pub use unsplash::UnsplashClient;
