mod client;
mod endpoints;

pub use client::{SynsetClient, UrlListStatus};
pub use endpoints::ServiceEndpoints;
