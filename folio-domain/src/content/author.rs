use serde::{Deserialize, Serialize};
use validator::Validate;

/// Author实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub spec: AuthorSpec,
}

/// AuthorSpec包含作者的元数据
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthorSpec {
    #[validate(length(min = 1))]
    pub name: String,

    pub title: Option<String>,

    pub image: Option<String>,

    #[validate(url)]
    pub twitter: Option<String>,

    #[validate(url)]
    pub mastodon: Option<String>,
}
