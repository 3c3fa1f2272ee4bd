use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub asset_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub asset_base_url: String,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    // Expect optional global object, e.g. window.__NEB_ENV = { API_BASE_URL: "..." }
    let w = crate::utils::storage::window().ok()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    let api_base_url = read_global_key("__NEB_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__NEB_CONFIG", &["api_base_url", "API_BASE_URL"]));
    let asset_base_url = read_global_key("__NEB_ENV", &["ASSET_BASE_URL", "asset_base_url"])
        .or_else(|| read_global_key("__NEB_CONFIG", &["asset_base_url", "ASSET_BASE_URL"]));
    RuntimeConfig {
        api_base_url,
        asset_base_url,
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()?).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn config_json_url() -> Option<String> {
    let origin = crate::utils::storage::window()
        .ok()?
        .location()
        .origin()
        .ok()?;
    Some(format!("{}/config.json", origin))
}

/// Strips trailing slashes and a trailing `/api` segment.
pub fn derive_asset_base(api_base_url: &str) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    trimmed
        .strip_suffix("/api")
        .unwrap_or(trimmed)
        .to_string()
}

/// Absolute URLs pass through; server-relative paths hang off `asset_base`.
pub fn join_asset_url(asset_base: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn resolve(cfg: RuntimeConfig) -> ResolvedConfig {
    let api_base_url = cfg
        .api_base_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let asset_base_url = cfg
        .asset_base_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| derive_asset_base(&api_base_url));
    ResolvedConfig {
        api_base_url,
        asset_base_url,
    }
}

async fn await_resolved() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut cfg = snapshot_from_globals();
    if cfg.api_base_url.is_none() {
        if let Some(fetched) = fetch_runtime_config().await {
            cfg.api_base_url = fetched.api_base_url;
            cfg.asset_base_url = cfg.asset_base_url.or(fetched.asset_base_url);
        }
    }
    let resolved = resolve(cfg);
    log::debug!("backend base url: {}", resolved.api_base_url);
    let _ = RESOLVED.set(resolved.clone());
    resolved
}

pub async fn await_api_base_url() -> String {
    await_resolved().await.api_base_url
}

pub async fn await_asset_base_url() -> String {
    await_resolved().await.asset_base_url
}

pub async fn init() {
    let _ = await_resolved().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_base_strips_api_segment() {
        assert_eq!(
            derive_asset_base("https://portal.example.com/api"),
            "https://portal.example.com"
        );
        assert_eq!(
            derive_asset_base("https://portal.example.com/api/"),
            "https://portal.example.com"
        );
        assert_eq!(
            derive_asset_base("https://portal.example.com/backend"),
            "https://portal.example.com/backend"
        );
    }

    #[test]
    fn report_paths_join_onto_asset_base() {
        assert_eq!(
            join_asset_url("https://portal.example.com/", "/reports/daily.pdf"),
            "https://portal.example.com/reports/daily.pdf"
        );
        assert_eq!(
            join_asset_url("https://portal.example.com", "reports/daily.pdf"),
            "https://portal.example.com/reports/daily.pdf"
        );
        assert_eq!(
            join_asset_url("https://portal.example.com", "https://cdn.example.com/r.pdf"),
            "https://cdn.example.com/r.pdf"
        );
    }

    #[test]
    fn resolve_falls_back_to_defaults() {
        let resolved = resolve(RuntimeConfig::default());
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.asset_base_url, "http://localhost:8080");
    }

    #[test]
    fn resolve_prefers_explicit_asset_base() {
        let resolved = resolve(RuntimeConfig {
            api_base_url: Some("https://api.example.com/v1/".into()),
            asset_base_url: Some("https://files.example.com".into()),
        });
        assert_eq!(resolved.api_base_url, "https://api.example.com/v1");
        assert_eq!(resolved.asset_base_url, "https://files.example.com");
    }
}
