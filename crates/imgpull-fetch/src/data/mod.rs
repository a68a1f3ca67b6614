mod options;

pub use options::{FetchOptions, HttpResponse};
