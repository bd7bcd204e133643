use serde::Deserialize;

// search/photos
//  ├── total
//  └── results[]
//       ├── id
//       └── urls
//            ├── raw
//            ├── full
//            ├── regular   <- what we download
//            └── small

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
}

impl SearchResponse {
    pub fn into_first(self) -> Option<Photo> {
        self.results.into_iter().next()
    }
}
