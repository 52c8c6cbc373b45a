use async_trait::async_trait;
use folio_domain::content::{CollectionKind, Language, Post};
use folio_infra::store::ContentStore;
use std::sync::Arc;

/// 集合查询参数
///
/// draft/featured按精确相等过滤：frontmatter未写该字段的文章
/// 在两个过滤值下都会被排除。
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionQuery {
    pub language: Language,
    pub draft: Option<bool>,
    pub featured: Option<bool>,
}

impl CollectionQuery {
    /// 仅按语言过滤的查询
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            draft: None,
            featured: None,
        }
    }
}

/// 集合查询服务trait
#[async_trait]
pub trait CollectionService: Send + Sync {
    /// 列出一个集合内符合查询条件的文章，按发布时间倒序
    async fn list(
        &self,
        kind: CollectionKind,
        query: CollectionQuery,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>>;
}

/// 默认集合查询服务实现
pub struct DefaultCollectionService<S: ContentStore> {
    store: Arc<S>,
}

impl<S: ContentStore> DefaultCollectionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ContentStore> CollectionService for DefaultCollectionService<S> {
    async fn list(
        &self,
        kind: CollectionKind,
        query: CollectionQuery,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>> {
        let mut posts = self.store.get_all_posts(kind).await?;

        let prefix = query.language.id_prefix();
        posts.retain(|post| post.id.starts_with(&prefix));

        if let Some(draft) = query.draft {
            posts.retain(|post| post.spec.draft == Some(draft));
        }

        if let Some(featured) = query.featured {
            posts.retain(|post| post.spec.featured == Some(featured));
        }

        // 稳定排序：发布时间相同时保留存储顺序
        posts.sort_by(|a, b| b.spec.published.cmp(&a.spec.published));

        Ok(posts)
    }
}
