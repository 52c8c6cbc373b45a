pub mod author;
pub mod language;
pub mod post;

pub use author::{Author, AuthorSpec};
pub use language::Language;
pub use post::{CollectionKind, Post, PostRef, PostSpec};

/// 内容集合相关的常量
pub mod constant {
    /// Snippet集合（短篇内容）
    pub const SNIPPET_KIND: &str = "snippet";
    /// Tutorial集合（长篇内容）
    pub const TUTORIAL_KIND: &str = "tutorial";

    /// 内容目录下各集合的子目录名
    pub const SNIPPETS_DIR: &str = "snippets";
    pub const TUTORIALS_DIR: &str = "tutorials";
    pub const AUTHORS_DIR: &str = "authors";

    /// 未指定标签时的默认标签
    pub const DEFAULT_TAG: &str = "others";

    /// 相关文章结果的最大数量
    pub const RELATED_POST_LIMIT: usize = 3;
}
