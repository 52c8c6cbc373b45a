use folio_domain::content::{CollectionKind, Language, Post};
use folio_infra::store::ContentStore;
use folio_service::content::{
    posts_by_tag, slugify_all, CollectionQuery, CollectionService, DefaultCollectionService,
    DefaultRelatedPostService, RelatedPostService,
};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::error::Result;

/// 渲染层消费的站点数据文件内容
#[derive(Debug, Serialize)]
pub struct SiteData {
    pub language: String,
    /// 文章 → 相关文章列表（最多3篇）
    pub related: IndexMap<String, Vec<String>>,
    /// 标签slug → 文章列表
    pub tags: IndexMap<String, Vec<String>>,
}

/// 文章在数据文件中的键（集合+id）
fn post_key(post: &Post) -> String {
    format!("{}:{}", post.collection.as_str(), post.id)
}

/// 装配指定语言的站点数据：相关文章映射和标签索引
pub async fn generate<S: ContentStore>(store: Arc<S>, language: Language) -> Result<SiteData> {
    let collections = Arc::new(DefaultCollectionService::new(store.clone()));
    let related_service = DefaultRelatedPostService::new(collections.clone());

    let query = CollectionQuery::for_language(language);
    let (snippets, tutorials) = tokio::try_join!(
        collections.list(CollectionKind::Snippet, query),
        collections.list(CollectionKind::Tutorial, query),
    )?;
    let posts: Vec<Post> = snippets.into_iter().chain(tutorials).collect();

    // 检查失效的作者引用（只告警，不中断构建）
    let authors = store.get_all_authors().await?;
    let author_ids: HashSet<&str> = authors.iter().map(|a| a.id.as_str()).collect();
    for post in &posts {
        for author in &post.spec.authors {
            if !author_ids.contains(author.as_str()) {
                warn!(
                    post = post.id.as_str(),
                    author = author.as_str(),
                    "unknown author reference"
                );
            }
        }
    }

    let mut related: IndexMap<String, Vec<String>> = IndexMap::new();
    for post in &posts {
        let resolved = related_service.resolve_related(post, language).await?;
        related.insert(post_key(post), resolved.iter().map(post_key).collect());
    }

    // 标签索引：按首次出现顺序收集slug化的标签
    let mut tag_slugs: IndexSet<String> = IndexSet::new();
    for post in &posts {
        tag_slugs.extend(slugify_all(&post.spec.tags));
    }
    let mut tags: IndexMap<String, Vec<String>> = IndexMap::new();
    for slug in &tag_slugs {
        let matched = posts_by_tag(&posts, slug);
        tags.insert(slug.clone(), matched.into_iter().map(post_key).collect());
    }

    Ok(SiteData {
        language: language.to_string(),
        related,
        tags,
    })
}

/// 将站点数据写为JSON文件
pub fn write_site_data(data: &SiteData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}
