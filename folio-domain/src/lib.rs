pub mod content;

pub use content::{
    Post, PostSpec, PostRef,
    Author, AuthorSpec,
    CollectionKind, Language,
};
