//! Cross-crate flow: authenticate, take a quiz from the bundled
//! vocabulary, submit the result, and read the dashboard back.

use api_client::{ApiClient, ApiClientConfig, QuizSubmission, SessionManager};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;
use std::sync::Arc;
use storage::{KeyValue, KvConfig, KvStore};
use vocab::data::builtin_corpus;
use vocab::generate_questions;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_backend() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "u1", "name": "Sam", "email": "sam@example.com"},
            "token": "t0k"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/quiz/submit"))
        .and(header("Authorization", "Bearer t0k"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"saved": true})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/quiz/stats"))
        .and(header("Authorization", "Bearer t0k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalQuizzes": 1,
            "averageScore": 100.0,
            "totalCorrect": 10,
            "totalQuestions": 10,
            "bestScore": 100
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn full_quiz_session_flow() {
    let server = start_backend().await;
    let client = ApiClient::new(ApiClientConfig::new(server.uri())).unwrap();
    let store = Arc::new(KvStore::in_memory().unwrap());
    let manager = SessionManager::new(client, store);

    manager.load().await;
    manager.login("sam@example.com", "secret123").await.unwrap();
    assert!(manager.is_authenticated());

    // Take a quiz against the bundled corpus.
    let corpus = builtin_corpus();
    let mut rng = SmallRng::seed_from_u64(7);
    let questions = generate_questions(&corpus, 10, &mut rng).unwrap();
    assert_eq!(questions.len(), 10);

    // Play a perfect round.
    let correct = questions
        .iter()
        .filter(|q| q.options.contains(&q.correct_answer))
        .count() as u32;
    assert_eq!(correct, 10);

    let token = manager.token().unwrap();
    let submission = QuizSubmission {
        quiz_type: "vocabulary".to_string(),
        score: 100,
        total_questions: 10,
        correct_answers: correct,
        time_spent: 95,
    };
    manager.client().submit_quiz(&token, &submission).await.unwrap();

    let stats = manager.client().quiz_stats(&token).await.unwrap();
    assert_eq!(stats.total_quizzes, 1);
    assert_eq!(stats.best_score, 100);
}

#[tokio::test]
async fn session_rehydrates_across_app_restarts() {
    let server = start_backend().await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let kv_path = temp_dir.path().join("kv");

    // First launch.
    {
        let client = ApiClient::new(ApiClientConfig::new(server.uri())).unwrap();
        let store = Arc::new(KvStore::new(KvConfig::new(kv_path.to_string_lossy())).unwrap());
        let manager = SessionManager::new(client, store.clone());

        manager.load().await;
        manager.login("sam@example.com", "secret123").await.unwrap();
        store.flush().unwrap();
    }

    // Second launch rehydrates without hitting the backend.
    {
        let client = ApiClient::new(ApiClientConfig::new("http://127.0.0.1:1")).unwrap();
        let store = Arc::new(KvStore::new(KvConfig::new(kv_path.to_string_lossy())).unwrap());
        let manager = SessionManager::new(client, store.clone());

        manager.load().await;
        assert!(manager.is_authenticated());
        assert_eq!(manager.current_user().unwrap().email, "sam@example.com");

        // And logout leaves nothing behind for a third launch.
        manager.logout().await;
        assert_eq!(store.get("token").unwrap(), None);
        store.flush().unwrap();
    }

    {
        let client = ApiClient::new(ApiClientConfig::new("http://127.0.0.1:1")).unwrap();
        let store = Arc::new(KvStore::new(KvConfig::new(kv_path.to_string_lossy())).unwrap());
        let manager = SessionManager::new(client, store);

        manager.load().await;
        assert!(!manager.is_authenticated());
    }
}
