//! Shared blocking HTTP plumbing for the scrape flows: one lazily-built
//! client, page fetches, byte downloads, and the politeness pause.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BASE_URL: &str = "https://www.iplt20.com";
// The source site serves browsers only; the default reqwest agent gets a 403.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build http client")
    })
}

pub fn base_url() -> String {
    std::env::var("IPL_BASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Site-relative hrefs are resolved against the base; absolute URLs pass
/// through untouched.
pub fn absolute_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", base_url(), href)
    }
}

pub fn fetch_html(url: &str) -> Result<String> {
    let client = http_client()?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status: {url}"))?;
    response
        .text()
        .with_context(|| format!("body read failed: {url}"))
}

/// Fetches `url` and writes the bytes to `path`, creating parent
/// directories as needed.
pub fn download(url: &str, path: &Path) -> Result<()> {
    let client = http_client()?;
    let bytes = client
        .get(url)
        .send()
        .with_context(|| format!("request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status: {url}"))?
        .bytes()
        .with_context(|| format!("body read failed: {url}"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))
}

/// Politeness pause between successive requests to the source site.
pub fn pause(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}
