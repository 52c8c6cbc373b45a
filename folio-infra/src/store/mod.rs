use async_trait::async_trait;
use folio_domain::content::{Author, CollectionKind, Post};

pub mod file_store;
pub mod memory;
#[cfg(test)]
mod tests;

pub use file_store::{FileContentStore, StoreError};
pub use memory::InMemoryContentStore;

/// ContentStore trait 定义内容存储的只读访问
///
/// 存储层不区分语言；语言过滤由上层的集合查询完成。
/// 对于固定的存储快照，返回顺序必须是确定的。
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// 返回指定集合的全部文章（含草稿）
    async fn get_all_posts(
        &self,
        kind: CollectionKind,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>>;

    /// 返回全部作者
    async fn get_all_authors(
        &self,
    ) -> Result<Vec<Author>, Box<dyn std::error::Error + Send + Sync>>;
}
