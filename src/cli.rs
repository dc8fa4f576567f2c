use clap::{Parser, Subcommand};
use crate::metrics::SourceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイト用ツール（引用数メトリクス取得・HTTP関数）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 引用数を1回取得してJSONを出力
    Metrics {
        /// 取得手段 (http/browser)。省略時は設定値
        #[arg(short, long)]
        source: Option<SourceKind>,

        /// 保存済みのプロフィールHTML（ネットワークを使わない）
        #[arg(long)]
        html: Option<PathBuf>,

        /// statusCode/headers/body 形式で出力
        #[arg(long)]
        raw: bool,
    },

    /// HTTP関数をローカルで起動
    Serve {
        /// 待受アドレス（デフォルト: 設定値）
        #[arg(short, long)]
        addr: Option<String>,

        /// 取得手段 (http/browser)
        #[arg(short, long)]
        source: Option<SourceKind>,
    },

    /// 設定の表示・変更
    Config {
        /// プロフィールURLを設定
        #[arg(long)]
        set_profile_url: Option<String>,

        /// リモートブラウザのWebSocketエンドポイントを設定
        #[arg(long)]
        set_browser_endpoint: Option<String>,

        /// 既定の取得手段を設定
        #[arg(long)]
        set_source: Option<SourceKind>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
