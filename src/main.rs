use clap::Parser;
use portfolio_site::{cli, config, error, metrics, server};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use metrics::MetricsFetcher;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Metrics { source, html, raw } => {
            let kind = source.unwrap_or(config.source);
            let fetcher = MetricsFetcher::from_config(&config, kind, html)?;

            eprintln!("📚 portfolio - 引用数取得 ({})\n", fetcher.source_name());
            let response = fetcher.invoke().await;

            if response.is_fallback() {
                eprintln!("⚠ 取得に失敗したためフォールバック値を出力します (status {})", response.status_code);
            } else {
                eprintln!("✔ 取得完了 (status {})", response.status_code);
            }

            if raw {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.body);
            }
        }

        Commands::Serve { addr, source } => {
            let kind = source.unwrap_or(config.source);
            let fetcher = MetricsFetcher::from_config(&config, kind, None)?;
            let addr = addr.unwrap_or_else(|| config.listen_addr.clone());

            println!("🚀 portfolio - HTTP関数 http://{}{}\n", addr, server::CITATIONS_PATH);
            server::serve(&addr, Arc::new(fetcher)).await?;
        }

        Commands::Config { set_profile_url, set_browser_endpoint, set_source, show } => {
            let mut config = config;
            let changed = set_profile_url.is_some() || set_browser_endpoint.is_some() || set_source.is_some();

            if let Some(url) = set_profile_url {
                config.profile_url = url;
            }
            if let Some(endpoint) = set_browser_endpoint {
                config.browser_endpoint = Some(endpoint);
            }
            if let Some(kind) = set_source {
                config.source = kind;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  プロフィールURL: {}", config.effective_profile_url());
                println!("  取得手段: {}", config.source.as_str());
                println!("  ブラウザ: {}", if config.effective_browser_endpoint().is_ok() { "設定済み" } else { "未設定" });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  論文数: {}", config.max_papers);
                println!("  待受アドレス: {}", config.listen_addr);
            }
        }
    }

    Ok(())
}
