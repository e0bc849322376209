//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 루트/헬스체크 엔드포인트를 등록합니다.
//!
//! 서버는 `NormalizePath::trim` 미들웨어로 끝의 슬래시를 제거하므로
//! `/users/`와 `/users`는 같은 엔드포인트입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::services::users::UserService;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// `UserService`는 호출하는 쪽에서 `web::Data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config());

    cfg.service(root);
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /users` - 사용자 생성
/// - `GET /users` - 전체 사용자 조회
/// - `GET /users/{id}` - 사용자 조회
/// - `PUT /users/{id}` - 사용자 부분 수정
/// - `DELETE /users/{id}` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Hello World! Now with MongoDB power!",
        "database": "Connected to MongoDB Atlas",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 저장소에 ping을 보내 그 결과를 보고합니다. 저장소 상태와 무관하게 200을 반환합니다.
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    let healthy = service.is_store_healthy().await;

    HttpResponse::Ok().json(json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "database": if healthy { "connected" } else { "disconnected" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, middleware, test, App};
    use serde_json::Value;
    use crate::domain::dto::users::response::{MessageResponse, UserResponse};
    use crate::repositories::users::InMemoryUserRepository;

    fn user_service(repo: &Arc<InMemoryUserRepository>) -> web::Data<UserService> {
        web::Data::new(UserService::new(repo.clone()))
    }

    macro_rules! init_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(user_service(&$repo))
                    .wrap(middleware::NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_root_greeting() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(body["message"], "Hello World! Now with MongoDB power!");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_health_reflects_store_ping() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
        assert!(body["timestamp"].is_string());

        repo.set_available(false);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "disconnected");
    }

    #[actix_web::test]
    async fn test_user_lifecycle_over_http() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({ "name": "Ada", "email": "ada@x.com", "age": 30 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let created: UserResponse = test::read_body_json(resp).await;
        assert_eq!(created.id.len(), 24);
        let user_uri = format!("/users/{}", created.id);

        let fetched: UserResponse =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(&user_uri).to_request()).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::put()
            .uri(&user_uri)
            .set_json(json!({ "age": 31 }))
            .to_request();
        let updated: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.email, "ada@x.com");
        assert_eq!(updated.created_at, created.created_at);

        let req = test::TestRequest::delete().uri(&user_uri).to_request();
        let message: MessageResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(message.message, "User deleted successfully");

        let resp = test::call_service(&app, test::TestRequest::get().uri(&user_uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "User not found");

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&user_uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_users_after_delete() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let mut ids = Vec::new();
        for (name, age) in [("Ada", 30), ("Grace", 45), ("Linus", 28)] {
            let req = test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "name": name, "email": format!("{}@x.com", name), "age": age }))
                .to_request();
            let created: UserResponse = test::call_and_read_body_json(&app, req).await;
            ids.push(created.id);
        }

        let req = test::TestRequest::delete().uri(&format!("/users/{}", ids[0])).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let users: Vec<UserResponse> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/users/").to_request()).await;
        let listed: Vec<String> = users.into_iter().map(|user| user.id).collect();
        assert_eq!(listed, ids[1..].to_vec());
    }

    #[actix_web::test]
    async fn test_out_of_range_age_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({ "name": "Ada", "email": "ada@x.com", "age": 151 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(repo.is_empty());

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({ "name": "Ada", "email": "ada@x.com", "age": 30 }))
            .to_request();
        let created: UserResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/users/{}", created.id))
            .set_json(json!({ "age": -1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let req = test::TestRequest::post()
            .uri("/users/")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"name": "Ada", "age": "thirty"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_not_found() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/users/not-a-real-id").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/users/not-a-real-id")
            .set_json(json!({ "age": 31 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/users/not-a-real-id").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_empty_patch_returns_record_unchanged() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({ "name": "Ada", "email": "ada@x.com", "age": 30 }))
            .to_request();
        let created: UserResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/users/{}", created.id))
            .set_json(json!({ "name": null }))
            .to_request();
        let updated: UserResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated, created);
    }

    #[actix_web::test]
    async fn test_store_failure_is_bad_request() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = init_app!(repo);
        repo.set_available(false);

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({ "name": "Ada", "email": "ada@x.com", "age": 30 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("unavailable"));
    }
}
