use folio_domain::content::Post;
use regex::Regex;
use std::sync::OnceLock;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-z0-9]+").unwrap())
}

/// 转为URL友好的slug：小写，非字母数字的连续片段折叠为单个 `-`
pub fn slugify(value: &str) -> String {
    let lower = value.to_lowercase();
    non_alphanumeric()
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

pub fn slugify_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| slugify(value)).collect()
}

/// 过滤出标签（slug化后）包含指定tag的文章
pub fn posts_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| slugify_all(&post.spec.tags).iter().any(|t| t == tag))
        .collect()
}
