//! 設定ファイルテスト

use portfolio_site::config::{Config, DEFAULT_PROFILE_URL};
use portfolio_site::metrics::SourceKind;
use tempfile::tempdir;

/// 設定ファイルが無ければ既定値
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読込失敗");

    assert_eq!(config.profile_url, DEFAULT_PROFILE_URL);
    assert_eq!(config.source, SourceKind::Browser);
    assert_eq!(config.max_papers, 6);
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.browser_endpoint.is_none());
}

/// 保存と再読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        browser_endpoint: Some("wss://chrome.example.com?token=abc".into()),
        source: SourceKind::Http,
        max_papers: 3,
        ..Default::default()
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読込失敗");
    assert_eq!(loaded.browser_endpoint.as_deref(), Some("wss://chrome.example.com?token=abc"));
    assert_eq!(loaded.source, SourceKind::Http);
    assert_eq!(loaded.max_papers, 3);
}

/// 一部だけ書かれた設定は残りが既定値
#[test]
fn test_partial_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"source": "http", "listen_addr": "0.0.0.0:3000"}"#).unwrap();

    let config = Config::load_from(&path).expect("読込失敗");
    assert_eq!(config.source, SourceKind::Http);
    assert_eq!(config.listen_addr, "0.0.0.0:3000");
    assert_eq!(config.profile_url, DEFAULT_PROFILE_URL);
}

/// 壊れた設定ファイルはエラー
#[test]
fn test_invalid_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ broken").unwrap();

    assert!(Config::load_from(&path).is_err());
}
