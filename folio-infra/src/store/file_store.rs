use async_trait::async_trait;
use folio_domain::content::{constant, Author, AuthorSpec, CollectionKind, Post, PostSpec};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use validator::Validate;
use walkdir::WalkDir;

use super::ContentStore;

/// 内容存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Missing frontmatter in {}", path.display())]
    MissingFrontmatter { path: PathBuf },

    #[error("Invalid frontmatter in {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid data file {}: {source}", path.display())]
    DataFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid metadata in {}: {source}", path.display())]
    Validation {
        path: PathBuf,
        source: validator::ValidationErrors,
    },
}

/// 基于文件系统的内容存储
///
/// 内容目录布局：
///   <dir>/snippets/<lang>/<slug>.md
///   <dir>/tutorials/<lang>/<slug>.md
///   <dir>/authors/<lang>/<slug>.yml
///
/// 文章id为 `<lang>/<slug>`，由文件路径推导。
pub struct FileContentStore {
    content_dir: PathBuf,
}

impl FileContentStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    fn collection_dir(&self, kind: CollectionKind) -> PathBuf {
        let dir = match kind {
            CollectionKind::Snippet => constant::SNIPPETS_DIR,
            CollectionKind::Tutorial => constant::TUTORIALS_DIR,
        };
        self.content_dir.join(dir)
    }

    fn load_posts(&self, kind: CollectionKind) -> Result<Vec<Post>, StoreError> {
        let base = self.collection_dir(kind);
        if !base.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        // 排序遍历保证存储顺序确定
        for entry in WalkDir::new(&base).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !has_extension(entry.path(), &["md", "mdx"]) {
                continue;
            }

            let path = entry.path();
            let source = std::fs::read_to_string(path)?;
            let frontmatter =
                extract_frontmatter(&source).ok_or_else(|| StoreError::MissingFrontmatter {
                    path: path.to_path_buf(),
                })?;

            let spec: PostSpec =
                serde_yaml::from_str(frontmatter).map_err(|source| StoreError::Frontmatter {
                    path: path.to_path_buf(),
                    source,
                })?;
            spec.validate().map_err(|source| StoreError::Validation {
                path: path.to_path_buf(),
                source,
            })?;

            let id = entry_id(&base, path);
            posts.push(Post {
                id,
                collection: kind,
                spec,
            });
        }

        debug!(kind = kind.as_str(), count = posts.len(), "loaded posts");
        Ok(posts)
    }

    fn load_authors(&self) -> Result<Vec<Author>, StoreError> {
        let base = self.content_dir.join(constant::AUTHORS_DIR);
        if !base.exists() {
            return Ok(Vec::new());
        }

        let mut authors = Vec::new();
        for entry in WalkDir::new(&base).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !has_extension(entry.path(), &["yml", "yaml"]) {
                continue;
            }

            let path = entry.path();
            let source = std::fs::read_to_string(path)?;
            let spec: AuthorSpec =
                serde_yaml::from_str(&source).map_err(|source| StoreError::DataFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            spec.validate().map_err(|source| StoreError::Validation {
                path: path.to_path_buf(),
                source,
            })?;

            authors.push(Author {
                id: entry_id(&base, path),
                spec,
            });
        }

        Ok(authors)
    }
}

#[async_trait]
impl ContentStore for FileContentStore {
    async fn get_all_posts(
        &self,
        kind: CollectionKind,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.load_posts(kind)?)
    }

    async fn get_all_authors(
        &self,
    ) -> Result<Vec<Author>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.load_authors()?)
    }
}

/// 提取文件开头 `---` 包围的YAML frontmatter
fn extract_frontmatter(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

/// 从相对路径推导条目id（去扩展名，用 `/` 连接）
fn entry_id(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path).with_extension("");
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e))
        .unwrap_or(false)
}
