pub mod log_capture;
pub mod mock_service;
mod test_utils;

pub use log_capture::LogCapture;
pub use mock_service::{MockResponse, MockService};
pub use test_utils::*;
