use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// 内容目录（包含snippets/tutorials/authors子目录）
    pub dir: PathBuf,
    /// 生成数据文件的语言
    pub language: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 数据文件的输出路径
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/site-data.json"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("folio.toml").required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"));

        // 如果存在.env文件，加载它
        if let Ok(_) = dotenv::dotenv() {
            builder = builder.add_source(config::Environment::with_prefix("FOLIO").separator("__"));
        }

        let config = builder.build()?;
        config.try_deserialize()
    }
}
