use async_trait::async_trait;
use folio_domain::content::{constant, CollectionKind, Language, Post};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::collection_service::{CollectionQuery, CollectionService};
use super::tag_rank::rank_tags;

/// 相关文章推荐服务trait
#[async_trait]
pub trait RelatedPostService: Send + Sync {
    /// 为一篇文章计算相关文章列表
    ///
    /// 结果最多3篇，作者显式声明的引用排在标签相似度匹配之前。
    /// 候选不足时返回更短的列表，不报错。
    async fn resolve_related(
        &self,
        post: &Post,
        language: Language,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>>;
}

/// 默认相关文章服务实现
pub struct DefaultRelatedPostService<Q: CollectionService> {
    collections: Arc<Q>,
}

impl<Q: CollectionService> DefaultRelatedPostService<Q> {
    pub fn new(collections: Arc<Q>) -> Self {
        Self { collections }
    }
}

#[async_trait]
impl<Q: CollectionService> RelatedPostService for DefaultRelatedPostService<Q> {
    async fn resolve_related(
        &self,
        post: &Post,
        language: Language,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>> {
        // 两个集合查询互相独立，并发执行；不过滤draft/featured，
        // 未发布的文章也可以作为相关内容
        let (snippets, tutorials) = tokio::try_join!(
            self.collections
                .list(CollectionKind::Snippet, CollectionQuery::for_language(language)),
            self.collections
                .list(CollectionKind::Tutorial, CollectionQuery::for_language(language)),
        )?;

        // 候选池：snippets在前tutorials在后，排除源文章自身
        let pool: Vec<Post> = snippets
            .into_iter()
            .chain(tutorials)
            .filter(|candidate| !candidate.same_identity(post))
            .collect();

        // 解析显式引用：命中的候选按声明顺序排在最前并离开候选池，
        // 失效引用直接跳过
        let mut resolved: Vec<Post> = Vec::new();
        let mut resolved_keys: HashSet<(CollectionKind, &str)> = HashSet::new();
        for post_ref in post.related_refs() {
            let hit = pool.iter().find(|candidate| {
                candidate.id == post_ref.id
                    && !resolved_keys.contains(&(candidate.collection, candidate.id.as_str()))
            });
            if let Some(candidate) = hit {
                resolved_keys.insert((candidate.collection, candidate.id.as_str()));
                resolved.push(candidate.clone());
            }
        }

        // 剩余候选按标签相似度评分；排序稳定，同分保留池顺序
        let mut ranked: Vec<(usize, &Post)> = pool
            .iter()
            .filter(|candidate| {
                !resolved_keys.contains(&(candidate.collection, candidate.id.as_str()))
            })
            .map(|candidate| (rank_tags(&post.spec.tags, &candidate.spec.tags), candidate))
            .collect();
        ranked.sort_by_key(|(rank, _)| Reverse(*rank));

        debug!(
            post = post.id.as_str(),
            explicit = resolved.len(),
            ranked = ranked.len(),
            "resolved related candidates"
        );

        let related: Vec<Post> = resolved
            .into_iter()
            .chain(ranked.into_iter().map(|(_, candidate)| candidate.clone()))
            .take(constant::RELATED_POST_LIMIT)
            .collect();

        Ok(related)
    }
}
