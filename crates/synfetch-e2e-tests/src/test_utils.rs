use crate::mock_service::{MockResponse, MockService};
use eyre::Result;
use std::path::{Path, PathBuf};
use synfetch_lib::config::{Config, DownloadConfig, ServiceConfig};
use tempfile::TempDir;

pub const PLACEHOLDER_TARGET: &str = "/photo_unavailable.png";

pub fn create_test_config(service: &MockService) -> Config {
    Config {
        root: None,
        service: ServiceConfig {
            children_url: service.url("/children?wnid={wnid}&full={full}"),
            labels_url: service.url("/labels?wnid={wnid}"),
            url_list_url: service.url("/mapping?wnid={wnid}"),
            invalid_response: "Invalid url!".to_string(),
            user_agent: Some("synfetch-e2e".to_string()),
        },
        download: DownloadConfig {
            image_extension: "jpg".to_string(),
            unavailable_image_urls: vec![service.url(PLACEHOLDER_TARGET)],
        },
    }
}

/// Starts a mock service that also serves the placeholder image.
pub fn start_mock_service() -> MockService {
    let service = MockService::start();
    service.route(PLACEHOLDER_TARGET, MockResponse::ok(&b"\x89PNG placeholder"[..]));
    service
}

pub fn mapping_target(wnid: &str) -> String {
    format!("/mapping?wnid={wnid}")
}

pub fn children_target(wnid: &str, full: bool) -> String {
    format!("/children?wnid={wnid}&full={}", if full { 1 } else { 0 })
}

pub fn labels_target(wnid: &str) -> String {
    format!("/labels?wnid={wnid}")
}

pub fn image_target(wnid: &str, name: &str) -> String {
    format!("/images/{wnid}/{name}.jpg")
}

/// Registers `count` images for `wnid` and the mapping that lists them.
/// Returns the filenames in list order.
pub fn serve_category(service: &MockService, wnid: &str, count: usize) -> Vec<String> {
    let names: Vec<String> = (1..=count).map(|i| format!("{wnid}_{i}")).collect();

    let mut mapping = String::new();
    for name in &names {
        let target = image_target(wnid, name);
        service.route(&target, MockResponse::ok(image_bytes(name)));
        mapping.push_str(&format!("{} {}\r\n", name, service.url(&target)));
    }
    service.route(&mapping_target(wnid), MockResponse::ok(mapping));

    names
}

pub fn image_bytes(name: &str) -> Vec<u8> {
    format!("JPEG:{name}").into_bytes()
}

pub fn image_path(root: &Path, wnid: &str, name: &str) -> PathBuf {
    root.join("img").join(wnid).join(format!("{name}.jpg"))
}

pub fn list_path(root: &Path, wnid: &str) -> PathBuf {
    root.join("list").join(format!("{wnid}.txt"))
}

pub fn setup_test_environment(service: &MockService) -> Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;

    let config = create_test_config(service);
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    Ok(temp_dir)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("synfetch_lib=debug,synfetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
