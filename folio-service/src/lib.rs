pub mod content;

pub use content::{
    CollectionQuery, CollectionService, DefaultCollectionService,
    RelatedPostService, DefaultRelatedPostService,
    rank_tags,
    slugify, slugify_all, posts_by_tag,
};
