use async_trait::async_trait;
use folio_domain::content::{Author, CollectionKind, Post};

use super::ContentStore;

/// 内存内容存储
///
/// 存储顺序即插入顺序；主要用于测试和工具代码。
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    posts: Vec<Post>,
    authors: Vec<Author>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            authors: Vec::new(),
        }
    }

    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn add_author(&mut self, author: Author) {
        self.authors.push(author);
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_all_posts(
        &self,
        kind: CollectionKind,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .posts
            .iter()
            .filter(|p| p.collection == kind)
            .cloned()
            .collect())
    }

    async fn get_all_authors(
        &self,
    ) -> Result<Vec<Author>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.authors.clone())
    }
}
