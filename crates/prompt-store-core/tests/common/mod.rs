use prompt_store_core::{params::AddPrompt, PromptStore, PromptStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store backed by a temporary file
pub fn create_test_store() -> (TempDir, PromptStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = PromptStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Builds add-prompt parameters from borrowed strings.
pub fn add_params(title: &str, content: &str, tags: &[&str]) -> AddPrompt {
    AddPrompt {
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
