use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constant;
use super::language::Language;

/// 内容集合的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Snippet,
    Tutorial,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Snippet => constant::SNIPPET_KIND,
            CollectionKind::Tutorial => constant::TUTORIAL_KIND,
        }
    }
}

/// 指向另一篇文章的引用（作者在frontmatter中手工维护）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub collection: CollectionKind,
    pub id: String,
}

/// Post实体
///
/// id带语言前缀（如 `en/my-post`），在单个集合内唯一。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub collection: CollectionKind,
    pub spec: PostSpec,
}

impl Post {
    /// 检查两篇文章是否为同一身份（集合+id）
    pub fn same_identity(&self, other: &Post) -> bool {
        self.collection == other.collection && self.id == other.id
    }

    /// 检查id是否属于指定语言
    pub fn in_language(&self, language: Language) -> bool {
        self.id.starts_with(&language.id_prefix())
    }

    /// 从id前缀解析文章语言（前缀未知时返回None）
    pub fn language(&self) -> Option<Language> {
        self.id.split_once('/').and_then(|(code, _)| Language::parse(code))
    }

    /// id去掉语言前缀后的部分
    pub fn slug(&self) -> &str {
        self.id.split_once('/').map(|(_, rest)| rest).unwrap_or(&self.id)
    }

    /// 作者维护的相关文章引用，snippets声明的在前
    pub fn related_refs(&self) -> Vec<&PostRef> {
        self.spec
            .related_snippets
            .iter()
            .flatten()
            .chain(self.spec.related_tutorials.iter().flatten())
            .collect()
    }
}

/// PostSpec包含文章frontmatter中的元数据
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostSpec {
    #[validate(length(min = 1))]
    pub title: String,

    pub description: String,

    pub published: DateTime<Utc>,

    pub updated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub draft: Option<bool>,

    #[serde(default)]
    pub featured: Option<bool>,

    /// 标签，未指定时默认为 ["others"]
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(rename = "ogImage")]
    pub og_image: Option<String>,

    #[validate(url)]
    #[serde(rename = "ogVideo")]
    pub og_video: Option<String>,

    #[serde(rename = "postSlug")]
    pub post_slug: Option<String>,

    #[serde(rename = "relatedSnippets")]
    pub related_snippets: Option<Vec<PostRef>>,

    #[serde(rename = "relatedTutorials")]
    pub related_tutorials: Option<Vec<PostRef>>,
}

fn default_tags() -> Vec<String> {
    vec![constant::DEFAULT_TAG.to_string()]
}
