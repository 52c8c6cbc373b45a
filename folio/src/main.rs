mod config;
mod error;
mod generator;

use config::Config;
use error::{FolioError, Result};
use folio_domain::content::Language;
use folio_infra::store::FileContentStore;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting Folio data build...");

    // 加载配置
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    let language = Language::parse(&config.content.language).ok_or_else(|| {
        FolioError::Validation(format!(
            "Unsupported language: {}",
            config.content.language
        ))
    })?;

    // 装配站点数据
    let store = Arc::new(FileContentStore::new(config.content.dir.clone()));
    let data = generator::generate(store, language).await?;
    info!(
        posts = data.related.len(),
        tags = data.tags.len(),
        "Site data assembled"
    );

    // 写出数据文件
    generator::write_site_data(&data, &config.output.path)?;
    info!("Site data written to {}", config.output.path.display());

    Ok(())
}
