//! Search box handling
//!
//! There is no search backend: a query is either rejected as blank or
//! acknowledged, and the caller later reports a made-up result count.

use crate::notice::Notice;

/// Warning shown for a blank query
pub const EMPTY_QUERY: &str = "请输入搜索关键词";

/// Upper bound (exclusive) of the reported result count
pub const MAX_RESULTS: u32 = 1000;

/// Outcome of submitting the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; nothing is searched
    Rejected(Notice),
    /// Query accepted; results arrive later
    Pending { query: String, notice: Notice },
}

impl SearchOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            SearchOutcome::Rejected(notice) => notice,
            SearchOutcome::Pending { notice, .. } => notice,
        }
    }
}

/// Validate and acknowledge a query
pub fn perform_search(query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::Rejected(Notice::warning(EMPTY_QUERY));
    }
    SearchOutcome::Pending {
        query: query.to_string(),
        notice: Notice::info(format!("正在搜索: {}", query)),
    }
}

/// Notice reporting how many results were found
pub fn results_notice(count: u32) -> Notice {
    Notice::success(format!("找到 {} 条相关结果", count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_blank_query_rejected() {
        for query in ["", "   ", "\t\n"] {
            let outcome = perform_search(query);
            assert_eq!(outcome, SearchOutcome::Rejected(Notice::warning(EMPTY_QUERY)));
        }
    }

    #[test]
    fn test_query_kept_verbatim() {
        match perform_search(" 原神 ") {
            SearchOutcome::Pending { query, notice } => {
                assert_eq!(query, " 原神 ");
                assert_eq!(notice.level, NoticeLevel::Info);
                assert_eq!(notice.message, "正在搜索:  原神 ");
            }
            other => panic!("expected pending search, got {:?}", other),
        }
    }

    #[test]
    fn test_results_notice() {
        assert_eq!(results_notice(42).message, "找到 42 条相关结果");
    }
}
