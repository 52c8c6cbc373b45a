pub mod collection_service;
pub mod related_service;
pub mod slug_utils;
pub mod tag_rank;

pub use collection_service::{CollectionQuery, CollectionService, DefaultCollectionService};
pub use related_service::{DefaultRelatedPostService, RelatedPostService};
pub use slug_utils::{posts_by_tag, slugify, slugify_all};
pub use tag_rank::rank_tags;
