//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_data, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn register(server: &TestServer, request: &RegisterRequest) -> AuthData {
    let response = server
        .post("/api/v1/auth/register", request)
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn register_admin(server: &TestServer) -> AuthData {
    register(server, &RegisterRequest::unique_admin()).await
}

async fn create_topic(server: &TestServer, admin_token: &str) -> TopicData {
    let response = server
        .post_auth("/api/v1/topics", admin_token, &CreateTopicRequest::unique())
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn create_subtopic(
    server: &TestServer,
    admin_token: &str,
    topic_id: &str,
    difficulty: &str,
) -> SubtopicData {
    let request = CreateSubtopicRequest::unique(topic_id, difficulty);
    let response = server
        .post_auth("/api/v1/subtopics", admin_token, &request)
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let auth = register(&server, &request).await;
    assert_eq!(auth.name, request.name);
    assert_eq!(auth.email, request.email.to_lowercase());
    assert_eq!(auth.role, "user");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_answers_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    register(&server, &request).await;

    // Same email in a different case is still a duplicate
    request.email = request.email.to_uppercase();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    register(&server, &register_req).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthData = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.name, register_req.name);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    register(&server, &register_req).await;

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "wrongpass".to_string(),
        role: None,
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_wrong_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    register(&server, &register_req).await;

    // The account exists as "user"; logging in as "admin" must fail
    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: register_req.password.clone(),
        role: Some("admin".to_string()),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_me_returns_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::unique()).await;

    let response = server.get_auth("/api/v1/auth/me", &auth.token).await.unwrap();
    let user: UserData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, auth.id);
    assert_eq!(user.email, auth.email);
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth("/api/v1/auth/logout", &auth.token, &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The old token no longer matches the stored session
    let response = server.get_auth("/api/v1/auth/me", &auth.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_second_login_invalidates_first_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let first = register(&server, &register_req).await;

    // Login from a "second device"
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let second: AuthData = assert_data(response, StatusCode::OK).await.unwrap();

    // First session is now rejected, second still works
    let response = server.get_auth("/api/v1/auth/me", &first.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/auth/me", &second.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Topic Tests
// ============================================================================

#[tokio::test]
async fn test_create_topic_derives_slug() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let topic = create_topic(&server, &admin.token).await;
    assert!(topic.is_active);
    assert_eq!(topic.slug, topic.name.to_lowercase().replace(' ', "-"));
}

#[tokio::test]
async fn test_create_topic_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth("/api/v1/topics", &user.token, &CreateTopicRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_topic_name_answers_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let request = CreateTopicRequest::unique();
    let response = server
        .post_auth("/api/v1/topics", &admin.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/topics", &admin.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_slug_collision_gets_numeric_suffix() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let base = CreateTopicRequest::unique();
    let response = server
        .post_auth("/api/v1/topics", &admin.token, &base)
        .await
        .unwrap();
    let first: TopicData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Different name, identical slug derivation
    let clashing = CreateTopicRequest {
        name: format!("{}!", base.name),
        description: None,
    };
    let response = server
        .post_auth("/api/v1/topics", &admin.token, &clashing)
        .await
        .unwrap();
    let second: TopicData = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(second.slug, format!("{}-1", first.slug));
}

#[tokio::test]
async fn test_get_topic_by_slug() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;

    let response = server
        .get(&format!("/api/v1/topics/slug/{}", topic.slug))
        .await
        .unwrap();
    let fetched: TopicData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, topic.id);
}

#[tokio::test]
async fn test_topic_list_pagination_clamps() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/topics?page=0&limit=1000")
        .await
        .unwrap();
    let page: PageData<TopicData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 100);

    let response = server
        .get("/api/v1/topics?page=-1&limit=10")
        .await
        .unwrap();
    let page: PageData<TopicData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.page, 1);
}

#[tokio::test]
async fn test_topic_search_matches_description() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let token = format!("windowing-{}", unique_suffix());
    let mut request = CreateTopicRequest::unique();
    request.description = Some(format!("Notes on {token} techniques"));
    let response = server
        .post_auth("/api/v1/topics", &admin.token, &request)
        .await
        .unwrap();
    let topic: TopicData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // The token appears in the description only, not the name.
    let response = server
        .get(&format!("/api/v1/topics/search?search={token}"))
        .await
        .unwrap();
    let page: PageData<TopicData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().any(|t| t.id == topic.id));
}

#[tokio::test]
async fn test_delete_topic_cascades() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;
    let subtopic = create_subtopic(&server, &admin.token, &topic.id, "easy").await;

    let response = server
        .delete_auth(&format!("/api/v1/topics/{}", topic.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/subtopics/{}", subtopic.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Subtopic Tests
// ============================================================================

#[tokio::test]
async fn test_create_subtopic_and_list_by_topic() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;

    let subtopic = create_subtopic(&server, &admin.token, &topic.id, "tough").await;
    assert_eq!(subtopic.topic_id, topic.id);
    assert_eq!(subtopic.difficulty, "tough");
    assert_eq!(subtopic.status, "pending");

    let response = server
        .get_auth(
            &format!("/api/v1/subtopics/topic/{}", topic.id),
            &admin.token,
        )
        .await
        .unwrap();
    let page: PageData<SubtopicData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().any(|s| s.id == subtopic.id));
}

#[tokio::test]
async fn test_duplicate_subtopic_order_answers_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;

    let mut first = CreateSubtopicRequest::unique(&topic.id, "easy");
    first.position = Some(3);
    let response = server
        .post_auth("/api/v1/subtopics", &admin.token, &first)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut second = CreateSubtopicRequest::unique(&topic.id, "easy");
    second.position = Some(3);
    let response = server
        .post_auth("/api/v1/subtopics", &admin.token, &second)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_omitted_subtopic_order_lands_at_the_end() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;

    let mut first = CreateSubtopicRequest::unique(&topic.id, "medium");
    first.position = Some(5);
    let response = server
        .post_auth("/api/v1/subtopics", &admin.token, &first)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut second = CreateSubtopicRequest::unique(&topic.id, "medium");
    second.position = None;
    let response = server
        .post_auth("/api/v1/subtopics", &admin.token, &second)
        .await
        .unwrap();
    let created: SubtopicData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.position, 6);
}

#[tokio::test]
async fn test_subtopic_rejects_unknown_difficulty_filter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .get_auth("/api/v1/subtopics?difficulty=brutal", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Progress Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_completion_is_involution() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;
    let subtopic = create_subtopic(&server, &admin.token, &topic.id, "easy").await;
    let user = register(&server, &RegisterRequest::unique()).await;

    let request = ToggleRequest {
        subtopic_id: subtopic.id.clone(),
    };

    let response = server
        .post_auth("/api/v1/topics/toggle-complete", &user.token, &request)
        .await
        .unwrap();
    let first: ToggleData = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(first.is_completed);
    assert_eq!(first.progress.overall.completed, 1);

    let response = server
        .post_auth("/api/v1/topics/toggle-complete", &user.token, &request)
        .await
        .unwrap();
    let second: ToggleData = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!second.is_completed);
    assert_eq!(second.progress.overall.completed, 0);
}

#[tokio::test]
async fn test_toggle_malformed_id_answers_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, &RegisterRequest::unique()).await;

    let request = ToggleRequest {
        subtopic_id: "not-a-snowflake".to_string(),
    };
    let response = server
        .post_auth("/api/v1/topics/toggle-complete", &user.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_toggle_unknown_subtopic_answers_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, &RegisterRequest::unique()).await;

    let request = ToggleRequest {
        subtopic_id: "999999999999999999".to_string(),
    };
    let response = server
        .post_auth("/api/v1/topics/toggle-complete", &user.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_progress_stats_invariants() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .get_auth("/api/v1/topics/progress", &user.token)
        .await
        .unwrap();
    let progress: ProgressData = assert_data(response, StatusCode::OK).await.unwrap();

    for bucket in [
        &progress.easy,
        &progress.medium,
        &progress.tough,
        &progress.overall,
    ] {
        assert!(bucket.completed >= 0 && bucket.completed <= bucket.total);
        if bucket.total > 0 {
            let expected =
                ((bucket.completed as f64 / bucket.total as f64) * 100.0).round() as u32;
            assert_eq!(bucket.percentage, expected);
        } else {
            assert_eq!(bucket.percentage, 0);
        }
    }

    assert_eq!(
        progress.overall.total,
        progress.easy.total + progress.medium.total + progress.tough.total
    );
}

#[tokio::test]
async fn test_topics_all_anonymous_annotates_false() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;
    create_subtopic(&server, &admin.token, &topic.id, "medium").await;

    let response = server.get("/api/v1/topics/all").await.unwrap();
    let topics: Vec<TopicWithSubtopicsData> = assert_data(response, StatusCode::OK).await.unwrap();

    let found = topics.iter().find(|t| t.id == topic.id).expect("topic listed");
    assert!(!found.subtopics.is_empty());
    assert!(found.subtopics.iter().all(|s| !s.is_completed));
}

#[tokio::test]
async fn test_completion_status_endpoint() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let topic = create_topic(&server, &admin.token).await;
    let subtopic = create_subtopic(&server, &admin.token, &topic.id, "easy").await;
    let user = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .get_auth(
            &format!("/api/v1/topics/completed/{}", subtopic.id),
            &user.token,
        )
        .await
        .unwrap();
    let status: CompletionStatusData = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!status.is_completed);

    let request = ToggleRequest {
        subtopic_id: subtopic.id.clone(),
    };
    server
        .post_auth("/api/v1/topics/toggle-complete", &user.token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/topics/completed/{}", subtopic.id),
            &user.token,
        )
        .await
        .unwrap();
    let status: CompletionStatusData = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(status.is_completed);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_users_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .get_auth("/api/v1/auth/admin/users", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_lists_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let user = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .get_auth(
            &format!("/api/v1/auth/admin/users?search={}", user.email),
            &admin.token,
        )
        .await
        .unwrap();
    let page: PageData<UserData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().any(|u| u.id == user.id));
}

#[tokio::test]
async fn test_dashboard_stats_shape() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;

    let response = server
        .get_auth("/api/v1/auth/admin/dashboard-stats", &admin.token)
        .await
        .unwrap();
    let stats: DashboardData = assert_data(response, StatusCode::OK).await.unwrap();

    assert!(stats.users.total >= 0);
    assert_eq!(stats.users.active_today, 0);
    assert!(stats.topics.subtopics >= 0);
    assert!(stats.progress.max_completed >= stats.progress.average_per_user as i64);
    assert!(stats.top_topics.len() <= 5);
    assert!(stats.recent_activity.len() <= 8);
}
