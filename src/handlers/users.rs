//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트입니다. 각 핸들러는 서비스 메서드 하나에
//! 대응하며, 결과/없음/에러를 HTTP 응답으로 변환하는 역할만 합니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `POST` | `/users` | 사용자 생성 | 200 | 400 |
//! | `GET` | `/users` | 전체 사용자 조회 | 200 | 400 |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 | 404 |
//! | `PUT` | `/users/{id}` | 사용자 부분 수정 | 200 | 404, 400 |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 | 404 |

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{MessageResponse, UserResponse};
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = service
        .get_all_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(AppError::user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .update_user(&user_id, payload.into_inner())
        .await?
        .ok_or_else(AppError::user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !service.delete_user(&user_id).await? {
        return Err(AppError::user_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}
