#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_store::PostgresPostStore;
    use blog_core::domain::{BlogPost, PostPatch};
    use blog_core::error::StoreError;
    use blog_core::fixtures::generate_posts;
    use blog_core::ports::PostStore;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn model(title: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            author_first_name: "Ada".to_owned(),
            author_last_name: "Lovelace".to_owned(),
            title: title.to_owned(),
            content: "Content".to_owned(),
            created: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let row = model("Test Post");
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result: Option<BlogPost> = store.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.author.display_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("One"), model("Two")]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let posts = store.find_all().await.unwrap();

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn test_insert_many_assigns_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let inputs = generate_posts(3);
        let posts = store.insert_many(inputs.clone()).await.unwrap();

        assert_eq!(posts.len(), 3);
        for (post, input) in posts.iter().zip(&inputs) {
            assert_eq!(post.title, input.title);
            assert_eq!(post.author, input.author);
        }
        assert_ne!(posts[0].id, posts[1].id);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let patch = PostPatch {
            title: Some("Heck Ya".to_owned()),
            ..Default::default()
        };
        let result = store.update_by_id(uuid::Uuid::new_v4(), patch).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_returns_patched_row() {
        let row = model("Before");
        let mut patched = row.clone();
        patched.title = "Heck Ya".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .append_query_results(vec![vec![patched]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let patch = PostPatch {
            title: Some("Heck Ya".to_owned()),
            ..Default::default()
        };
        let updated = store.update_by_id(row.id, patch).await.unwrap();

        assert_eq!(updated.title, "Heck Ya");
        assert_eq!(updated.id, row.id);
        assert_eq!(updated.created, chrono::DateTime::<chrono::Utc>::from(row.created));
    }

    #[tokio::test]
    async fn test_delete_missing_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = PostgresPostStore::new(db);
        store.delete_by_id(uuid::Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_count_reads_row_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items",
                Into::<Value>::into(7i64),
            )])]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        assert_eq!(store.count().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_drop_all_deletes_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 10,
            }])
            .into_connection();

        let store = PostgresPostStore::new(db);
        store.drop_all().await.unwrap();

        let log = store.db.into_transaction_log();
        assert_eq!(log.len(), 1);
    }
}
