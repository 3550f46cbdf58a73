//! REST API endpoint implementations.

mod capabilities;
mod jobs;
mod request;
mod search;
pub mod url_encoding;

pub use capabilities::{get_caps, get_index_caps};
pub use jobs::{create_job, delete_job, get_jobs, start_job, stop_job};
pub use request::{dispatch, send_request_with_retry};
pub use search::search;
pub use url_encoding::encode_path_segment;
