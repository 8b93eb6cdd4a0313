use std::sync::atomic::{AtomicU32, Ordering};

use tokio::net::TcpListener;

use trivia_api::db;
use trivia_api::server::app::{app, AppState};

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub pool: sqlx::SqlitePool,
    pub api_client: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);

    let pool = db::establish_connection(path.to_str().unwrap())
        .await
        .expect("Failed to open test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to migrate test database");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    let state = AppState {
        pool: pool.clone(),
        page_size: 10,
    };
    tokio::spawn(async move {
        axum::serve(listener, app(state))
            .await
            .expect("Server crashed");
    });

    TestApp {
        address,
        pool,
        api_client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub async fn seed_category(&self, kind: &str) -> i64 {
        let response = self
            .api_client
            .post(format!("{}/categories/", self.address))
            .form(&[("type", kind)])
            .send()
            .await
            .expect("Failed to create category");
        assert_eq!(200, response.status().as_u16());
        let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
        json["result"]["id"].as_i64().unwrap()
    }

    pub async fn seed_question(&self, question: &str, answer: &str, category: i64) -> i64 {
        let response = self
            .api_client
            .post(format!("{}/questions/", self.address))
            .form(&[
                ("question", question),
                ("answer", answer),
                ("category", &category.to_string()),
                ("difficulty", "1"),
            ])
            .send()
            .await
            .expect("Failed to create question");
        assert_eq!(200, response.status().as_u16());
        let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
        json["result"]["id"]
            .as_i64()
            .unwrap_or_else(|| panic!("question was not created: {json}"))
    }
}
