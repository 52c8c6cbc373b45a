//! 内容存储集成测试
//!
//! 验证文件存储的端到端行为：目录遍历、frontmatter解析、
//! id推导以及错误路径。

use super::*;
use folio_domain::content::{CollectionKind, PostRef};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &std::path::Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "snippets/en/hello-flutter.md",
        "---\n\
         title: Hello Flutter\n\
         description: A first snippet\n\
         published: 2023-05-01T10:00:00Z\n\
         tags:\n  - flutter\n  - state\n\
         ---\n\nBody text.\n",
    );
    write_file(
        dir.path(),
        "snippets/es/hola-flutter.md",
        "---\n\
         title: Hola Flutter\n\
         description: Un snippet\n\
         published: 2023-04-01T10:00:00Z\n\
         ---\n\nCuerpo.\n",
    );
    write_file(
        dir.path(),
        "tutorials/en/state-management.mdx",
        "---\n\
         title: State Management\n\
         description: A long tutorial\n\
         published: 2023-03-01T10:00:00Z\n\
         draft: true\n\
         relatedSnippets:\n\
         \x20 - collection: snippet\n\
         \x20   id: en/hello-flutter\n\
         ---\n\nBody.\n",
    );
    write_file(
        dir.path(),
        "authors/en/jane-doe.yml",
        "name: Jane Doe\ntitle: Engineer\n",
    );
    dir
}

#[tokio::test]
async fn test_file_store_loads_posts_with_derived_ids() {
    let dir = sample_content_dir();
    let store = FileContentStore::new(dir.path());

    let snippets = store.get_all_posts(CollectionKind::Snippet).await.unwrap();
    let ids: Vec<&str> = snippets.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["en/hello-flutter", "es/hola-flutter"]);
    assert!(snippets.iter().all(|p| p.collection == CollectionKind::Snippet));
    assert_eq!(snippets[0].spec.tags, vec!["flutter", "state"]);
    // 未指定标签时默认为others
    assert_eq!(snippets[1].spec.tags, vec!["others"]);
}

#[tokio::test]
async fn test_file_store_parses_related_refs() {
    let dir = sample_content_dir();
    let store = FileContentStore::new(dir.path());

    let tutorials = store.get_all_posts(CollectionKind::Tutorial).await.unwrap();
    assert_eq!(tutorials.len(), 1);
    assert_eq!(tutorials[0].id, "en/state-management");
    assert_eq!(tutorials[0].spec.draft, Some(true));
    assert_eq!(
        tutorials[0].spec.related_snippets,
        Some(vec![PostRef {
            collection: CollectionKind::Snippet,
            id: "en/hello-flutter".to_string(),
        }])
    );
}

#[tokio::test]
async fn test_file_store_loads_authors() {
    let dir = sample_content_dir();
    let store = FileContentStore::new(dir.path());

    let authors = store.get_all_authors().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id, "en/jane-doe");
    assert_eq!(authors[0].spec.name, "Jane Doe");
}

#[tokio::test]
async fn test_file_store_missing_collection_dir_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileContentStore::new(dir.path());

    let posts = store.get_all_posts(CollectionKind::Snippet).await.unwrap();
    assert!(posts.is_empty());
    assert!(store.get_all_authors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_rejects_missing_frontmatter() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "snippets/en/broken.md", "# No frontmatter here\n");
    let store = FileContentStore::new(dir.path());

    let err = store
        .get_all_posts(CollectionKind::Snippet)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("frontmatter"));
}

#[tokio::test]
async fn test_file_store_rejects_invalid_frontmatter() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "snippets/en/broken.md",
        "---\ntitle: Missing required fields\n---\n",
    );
    let store = FileContentStore::new(dir.path());

    assert!(store.get_all_posts(CollectionKind::Snippet).await.is_err());
}

#[test]
fn test_store_trait_object_safety() {
    // 测试trait可以作为trait object使用
    fn takes_store(_store: &dyn ContentStore) {}
    let _ = takes_store;
}

#[tokio::test]
async fn test_memory_store_preserves_insertion_order() {
    let dir = sample_content_dir();
    let file_store = FileContentStore::new(dir.path());
    let loaded = file_store
        .get_all_posts(CollectionKind::Snippet)
        .await
        .unwrap();
    let author = file_store.get_all_authors().await.unwrap().remove(0);

    let mut store = InMemoryContentStore::new();
    for post in loaded {
        store.add_post(post);
    }
    store.add_author(author);

    let posts = store.get_all_posts(CollectionKind::Snippet).await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["en/hello-flutter", "es/hola-flutter"]);
    assert_eq!(store.get_all_authors().await.unwrap().len(), 1);

    // 另一个集合为空
    let tutorials = store.get_all_posts(CollectionKind::Tutorial).await.unwrap();
    assert!(tutorials.is_empty());
}
