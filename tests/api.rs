//! 基于内存 SQLite 的端到端测试

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use grade_api::config::DatabaseConfig;
use grade_api::models::AppStartTime;
use grade_api::routes;
use grade_api::storage::Storage;
use grade_api::storage::sea_orm_storage::SeaOrmStorage;

async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    Arc::new(
        SeaOrmStorage::connect(&config)
            .await
            .expect("in-memory storage"),
    )
}

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .configure(|cfg| routes::configure_extractors(cfg, 1024 * 1024))
                .app_data(web::Data::new($storage))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: Utc::now(),
                }))
                .configure(routes::configure_system_routes)
                .configure(routes::configure_grades_routes)
                .configure(routes::configure_grade_inputs_routes)
                .default_service(web::to(routes::route_not_found)),
        )
        .await
    };
}

// 返回状态码与解析后的 JSON 响应体
macro_rules! call {
    ($app:expr, $req:expr $(,)?) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status: StatusCode = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("RFC 3339 timestamp")
}

#[actix_web::test]
async fn test_grade_lifecycle() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/grades").set_json(json!({
            "student_id": 7,
            "enrollment_id": 101,
            "course_subject_id": 3,
            "midterm_grade": 85.5,
            "finals_grade": 90.0,
            "subject_grade": 87.75,
            "remarks": "Passed"
        })),
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Grade created successfully");
    let id = body["data"]["subject_grade_id"].as_i64().unwrap();
    let created_at = timestamp(&body["data"]["created_at"]);

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/grades/{id}"))
            .set_json(json!({ "remarks": "Excellent" })),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Grade updated successfully");
    assert_eq!(body["data"]["remarks"], "Excellent");
    assert_eq!(body["data"]["subject_grade"], 87.75);
    assert!(timestamp(&body["data"]["updated_at"]) > created_at);

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/grades?student_id=7&course_subject_id="),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/grades/{id}")),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_id"], id);
    assert_eq!(body["message"], "Grade deleted successfully");

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/grades/{id}")),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Grade not found");

    let (status, _) = call!(app, test::TestRequest::get().uri(&format!("/api/grades/{id}")));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_grade_requires_identifiers() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/grades")
            .set_json(json!({ "student_id": 7 })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing required fields: student_id, enrollment_id, course_subject_id"
    );
}

#[actix_web::test]
async fn test_update_missing_grade_returns_404() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/grades/999")
            .set_json(json!({ "remarks": "Failed" })),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Grade not found");
}

#[actix_web::test]
async fn test_student_stats() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/grades/stats/42"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_subjects"], 0);
    assert_eq!(body["data"]["passed_count"], 0);
    assert!(body["data"]["average_grade"].is_null());

    for (course, grade, remarks) in [(1, 90.0, "Passed"), (2, 70.25, "Failed")] {
        let (status, _) = call!(
        app,
            test::TestRequest::post().uri("/api/grades").set_json(json!({
                "student_id": 42,
                "enrollment_id": 5,
                "course_subject_id": course,
                "subject_grade": grade,
                "remarks": remarks
            })),
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/grades/stats/42"));
    assert_eq!(body["data"]["total_subjects"], 2);
    assert_eq!(body["data"]["average_grade"], 80.13);
    assert_eq!(body["data"]["highest_grade"], 90.0);
    assert_eq!(body["data"]["lowest_grade"], 70.25);
    assert_eq!(body["data"]["passed_count"], 1);
    assert_eq!(body["data"]["failed_count"], 1);
}

#[actix_web::test]
async fn test_grade_input_validation() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/grade_inputs").set_json(json!({
            "subject_grade_id": 1,
            "input_type": "homework",
            "input_name": "HW 1",
            "score": 10,
            "term": "midterms"
        })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid input_type. Must be one of: quiz, exam, assignment, project, recitation, attendance"
    );

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/grade_inputs").set_json(json!({
            "subject_grade_id": 1,
            "input_type": "quiz",
            "input_name": "Quiz 1",
            "score": 10,
            "term": "prelims"
        })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid term. Must be one of: midterms, finals");

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/grade_inputs").set_json(json!({
            "subject_grade_id": 1,
            "input_type": "quiz",
            "term": "finals"
        })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing required fields: subject_grade_id, input_type, input_name, score, term"
    );

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/grade_inputs/1")
            .set_json(json!({ "term": "summer" })),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_grade_inputs_and_summary() {
    let app = init_app!(memory_storage().await);

    let inputs = [
        ("quiz", "Quiz 1", 80.0, "midterms"),
        ("exam", "Midterm Exam", 90.0, "midterms"),
        ("quiz", "Quiz 2", 70.0, "finals"),
    ];
    for (input_type, input_name, score, term) in inputs {
        let (status, body) = call!(
            app,
            test::TestRequest::post().uri("/api/grade_inputs").set_json(json!({
                "subject_grade_id": 5,
                "input_type": input_type,
                "input_name": input_name,
                "score": score,
                "term": term,
                "created_by": 2
            })),
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["input_type"], input_type);
    }

    // 连字符路径与下划线路径指向同一组资源
    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/grade-inputs?subject_grade_id=5&term=midterms"),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/grade_inputs/summary/5"),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["term"], "finals");
    assert_eq!(body["data"][0]["input_count"], 1);
    assert_eq!(body["data"][1]["term"], "midterms");
    assert_eq!(body["data"][1]["average_score"], 85.0);
    assert_eq!(body["data"][1]["highest_score"], 90.0);

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/grade_inputs/summary/404"),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_update_and_delete_grade_input() {
    let app = init_app!(memory_storage().await);

    let (_, body) = call!(
        app,
        test::TestRequest::post().uri("/api/grade_inputs").set_json(json!({
            "subject_grade_id": 9,
            "input_type": "project",
            "input_name": "Capstone",
            "score": 75,
            "term": "finals"
        })),
    );
    let id = body["data"]["grade_input_id"].as_i64().unwrap();

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/grade_inputs/{id}"))
            .set_json(json!({ "score": 88.5 })),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"], 88.5);
    assert_eq!(body["data"]["input_name"], "Capstone");
    assert_eq!(body["data"]["term"], "finals");

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/grade_inputs/{id}")),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_id"], id);

    let (status, _) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/grade_inputs/{id}")),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_requests_return_400() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/grades/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = call!(
        app,
        test::TestRequest::get().uri("/api/grades?student_id=seven"),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/grades")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_system_routes() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(app, test::TestRequest::get().uri("/"));
    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]["grades"].is_object());
    assert!(body["endpoints"]["gradeInputs"].is_object());

    let (status, body) = call!(app, test::TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "connected");

    let (status, body) = call!(app, test::TestRequest::patch().uri("/api/unknown?x=1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
    assert_eq!(body["path"], "/api/unknown?x=1");
    assert_eq!(body["method"], "PATCH");
}

#[actix_web::test]
async fn test_store_failure_returns_500_with_detail() {
    let app = init_app!(memory_storage().await);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/grade_inputs").set_json(json!({
            "subject_grade_id": 1,
            "input_type": "exam",
            "input_name": "Final Exam",
            "score": null,
            "term": "finals"
        })),
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error creating grade input");
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn test_closed_store_degrades_health() {
    let storage = memory_storage().await;
    let app = init_app!(storage.clone());

    storage.close().await.expect("close pool");

    let (status, body) = call!(app, test::TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], "DEGRADED");
    assert_eq!(body["database"], "disconnected");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/grades"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error fetching grades");
}
