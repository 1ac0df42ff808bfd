//! Shared helpers for tests: an in-process app over an injected pool, plus seeding functions
//! that go through the services so fixtures obey the same rules as real requests.

use axum_test::TestServer;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    api::models::{
        forms::{FormResponse, FormSave, QuestionSave},
        responses::{ResponseCreate, SubmittedResponse},
        users::{UserCreate, UserResponse},
    },
    config::{Config, DatabaseConfig, PoolSettings},
    services::{FormService, UserService},
    types::FormId,
};

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool: PoolSettings {
                // Every connection to sqlite::memory: is a separate database
                max_connections: 1,
                min_connections: 1,
                acquire_timeout_secs: 5,
                idle_timeout_secs: 0,
                max_lifetime_secs: 0,
            },
        },
        ..Default::default()
    }
}

pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

/// Create a form named `name` with questions "Question 1".."Question n" and a generated link.
pub async fn create_test_form(pool: &SqlitePool, name: &str, n_questions: usize) -> FormResponse {
    let questions = (1..=n_questions)
        .map(|i| QuestionSave {
            id: None,
            question_text: Some(format!("Question {i}")),
            question_type: Some("text".to_string()),
        })
        .collect();

    let form = FormSave {
        form_name: Some(name.to_string()),
        form_description: Some(format!("{name} description")),
        questions: Some(questions),
        ..Default::default()
    };

    FormService::new(pool.clone())
        .create_or_update_form(form)
        .await
        .expect("Failed to create test form")
}

/// Submit `n` responses with answers "answer 1".."answer n".
pub async fn create_test_responses(pool: &SqlitePool, form_id: FormId, n: usize) -> Vec<SubmittedResponse> {
    let responses = (1..=n)
        .map(|i| ResponseCreate {
            answer: Some(format!("answer {i}")),
            ..Default::default()
        })
        .collect();

    FormService::new(pool.clone())
        .add_responses(form_id, responses)
        .await
        .expect("Failed to create test responses")
}

pub async fn create_test_user(pool: &SqlitePool, email: &str, name: &str) -> UserResponse {
    let user = UserCreate {
        email: Some(email.to_string()),
        name: Some(name.to_string()),
    };

    UserService::new(pool.clone()).create_user(user).await.expect("Failed to create test user")
}

/// True for a lowercase hyphenated version 4 UUID.
pub fn is_uuid_v4(s: &str) -> bool {
    Uuid::parse_str(s).is_ok_and(|u| u.get_version_num() == 4 && u.hyphenated().to_string() == s)
}
