//! エラーケーステスト
//!
//! エラー型の表示と変換を検証

use portfolio_site::config::Config;
use portfolio_site::error::PortfolioError;

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("テスト設定エラー".to_string()),
        PortfolioError::Browser("接続失敗".to_string()),
        PortfolioError::Server("bind失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ブラウザ未設定エラーのメッセージ確認
#[test]
fn test_missing_browser_endpoint_message() {
    if std::env::var(portfolio_site::config::ENV_BROWSER_ENDPOINT).is_ok() {
        return;
    }
    let err = Config::default().effective_browser_endpoint().unwrap_err();
    let display = format!("{}", err);

    assert!(display.contains("設定エラー"));
    assert!(display.contains("portfolio config"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PortfolioError = io_err.into();

    assert!(matches!(err, PortfolioError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PortfolioError = json_err.into();

    assert!(matches!(err, PortfolioError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = portfolio_common::Error::Parse("概要表がありません".to_string());
    let err: PortfolioError = common_err.into();

    assert!(matches!(err, PortfolioError::Extraction(_)));
    assert!(format!("{}", err).contains("概要表がありません"));
}
