pub mod store;

pub use store::{ContentStore, FileContentStore, InMemoryContentStore, StoreError};
