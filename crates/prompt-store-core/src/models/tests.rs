#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        models::{
            Prompt, PromptPage, PromptSummary, SearchResults, TagFilterResults, TagList, TagUsage,
        },
        validation::{Pagination, SNIPPET_LEN},
    };

    fn create_test_prompt(content: &str) -> Prompt {
        Prompt {
            id: "00000000-0000-4000-8000-000000000001".to_string(),
            title: "Test Prompt".to_string(),
            content: content.to_string(),
            tags: vec!["coding".to_string(), "review".to_string()],
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    #[test]
    fn test_summary_truncates_snippet_by_characters() {
        let content = "ü".repeat(SNIPPET_LEN + 50);
        let summary = PromptSummary::from(&create_test_prompt(&content));
        assert_eq!(summary.snippet.chars().count(), SNIPPET_LEN);
        assert_eq!(summary.tags, vec!["coding", "review"]);
    }

    #[test]
    fn test_summary_keeps_short_content() {
        let summary = PromptSummary::from(&create_test_prompt("short"));
        assert_eq!(summary.snippet, "short");
    }

    #[test]
    fn test_page_has_more() {
        let summary = PromptSummary::from(&create_test_prompt("c"));
        let page = PromptPage::new(
            vec![summary.clone(); 10],
            25,
            Pagination::new(10, 10).unwrap(),
        );
        assert!(page.has_more);

        let last = PromptPage::new(vec![summary; 5], 25, Pagination::new(10, 20).unwrap());
        assert!(!last.has_more);
        assert_eq!(last.len(), 5);
    }

    #[test]
    fn test_search_results_serialize_flat() {
        let page = PromptPage::new(Vec::new(), 0, Pagination::default());
        let results = SearchResults {
            query: "rust".to_string(),
            page,
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["query"], "rust");
        assert_eq!(value["total"], 0);
        assert_eq!(value["limit"], 10);
        assert_eq!(value["offset"], 0);
        assert_eq!(value["has_more"], false);
        assert!(value["prompts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_tag_filter_results_serialize_matched_tags() {
        let results = TagFilterResults {
            matched_tags: vec!["a".to_string(), "b".to_string()],
            page: PromptPage::new(Vec::new(), 0, Pagination::default()),
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["matched_tags"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_tag_list_lookup() {
        let list = TagList::new(vec![
            TagUsage {
                name: "coding".to_string(),
                prompt_count: 2,
            },
            TagUsage {
                name: "orphan".to_string(),
                prompt_count: 0,
            },
        ]);
        assert_eq!(list.total, 2);
        assert_eq!(list.get("orphan").map(|t| t.prompt_count), Some(0));
        assert!(list.get("missing").is_none());
    }
}
