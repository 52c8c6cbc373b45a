/// 标签相似度评分
///
/// 统计candidate中出现在reference里的元素个数。单向包含计数：
/// candidate中的重复标签会重复计分，且不按标签集大小归一化。
/// 空的标签集得0分。
pub fn rank_tags(reference: &[String], candidate: &[String]) -> usize {
    candidate
        .iter()
        .filter(|tag| reference.contains(tag))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_rank_counts_overlap() {
        let reference = tags(&["flutter", "state"]);
        assert_eq!(rank_tags(&reference, &tags(&["flutter"])), 1);
        assert_eq!(rank_tags(&reference, &tags(&["flutter", "state"])), 2);
        assert_eq!(rank_tags(&reference, &tags(&["ios"])), 0);
    }

    #[test]
    fn test_rank_counts_candidate_duplicates() {
        let reference = tags(&["flutter", "state"]);
        // candidate中的重复标签重复计分
        assert_eq!(rank_tags(&reference, &tags(&["flutter", "state", "state"])), 3);
    }

    #[test]
    fn test_rank_empty_sets_yield_zero() {
        assert_eq!(rank_tags(&[], &tags(&["flutter"])), 0);
        assert_eq!(rank_tags(&tags(&["flutter"]), &[]), 0);
        assert_eq!(rank_tags(&[], &[]), 0);
    }

    #[test]
    fn test_rank_is_one_directional() {
        // reference中的重复不影响得分
        let reference = tags(&["flutter", "flutter"]);
        assert_eq!(rank_tags(&reference, &tags(&["flutter"])), 1);
    }
}
