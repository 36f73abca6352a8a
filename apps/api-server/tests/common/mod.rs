//! Shared test harness: a live server over an injected post store.
//!
//! With `TEST_DATABASE_URL` set the store is the migrated Postgres test
//! database, otherwise a fresh in-memory store per test.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use tokio::sync::{Mutex, MutexGuard};

use blog_api::config::{AppConfig, Environment};
use blog_api::state::AppState;
use blog_core::domain::BlogPost;
use blog_core::fixtures::generate_posts;
use blog_core::ports::PostStore;
use blog_infra::InMemoryPostStore;

/// Number of random posts seeded before each test.
pub const SEED_COUNT: usize = 10;

// Tests sharing the one test database run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn PostStore>,
    pub client: reqwest::Client,
    handle: ServerHandle,
    _db_guard: Option<MutexGuard<'static, ()>>,
}

impl TestApp {
    /// Start a server over the test store and seed it.
    pub async fn spawn() -> Self {
        dotenvy::dotenv().ok();

        let config = AppConfig::for_environment(Environment::Test);
        let Some(db_config) = config.database else {
            return Self::spawn_with(Arc::new(InMemoryPostStore::new())).await;
        };

        let guard = DB_LOCK.lock().await;
        let state = AppState::from_config(Some(&db_config))
            .await
            .expect("Failed to connect to the test database");
        // Rows left behind by a test that panicked before teardown.
        tear_down_db(state.posts.as_ref()).await;

        let mut app = Self::spawn_with(state.posts).await;
        app._db_guard = Some(guard);
        app
    }

    /// Start a server over `store` and seed it.
    pub async fn spawn_with(store: Arc<dyn PostStore>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener.local_addr().expect("listener address").port();

        let server =
            blog_api::run(listener, AppState::new(store.clone())).expect("Failed to build server");
        let handle = server.handle();
        tokio::spawn(server);

        seed_blog_data(store.as_ref()).await;

        Self {
            address: format!("http://127.0.0.1:{}", port),
            store,
            client: reqwest::Client::new(),
            handle,
            _db_guard: None,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Any stored post.
    pub async fn any_post(&self) -> BlogPost {
        self.store
            .find_all()
            .await
            .expect("find_all")
            .into_iter()
            .next()
            .expect("store should be seeded")
    }

    /// Drop the store contents, then stop the server.
    pub async fn teardown(self) {
        tear_down_db(self.store.as_ref()).await;
        self.handle.stop(true).await;
    }
}

pub async fn seed_blog_data(store: &dyn PostStore) -> Vec<BlogPost> {
    store
        .insert_many(generate_posts(SEED_COUNT))
        .await
        .expect("Failed to seed posts")
}

pub async fn tear_down_db(store: &dyn PostStore) {
    store.drop_all().await.expect("Failed to drop posts");
}
