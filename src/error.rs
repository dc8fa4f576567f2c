use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("プロフィール取得エラー: {0}")]
    ProfileFetch(#[from] reqwest::Error),

    #[error("ブラウザ操作エラー: {0}")]
    Browser(String),

    #[error("ページ解析エラー: {0}")]
    Extraction(#[from] portfolio_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("サーバーエラー: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
