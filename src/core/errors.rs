//! # Application Error Handling System
//!
//! 사용자 CRUD 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 에러 메시지를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 HTTP 응답을 만들 수 있게 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | HTTP 상태 | 발생 시점 |
//! |------|-----------|-----------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 검증 실패, JSON 파싱 실패 |
//! | `DatabaseError` | 400 Bad Request | MongoDB 연결/쿼리 실패, 생성 직후 재조회 실패 |
//! | `NotFound` | 404 Not Found | 존재하지 않거나 형식이 잘못된 ID |
//! | `InternalError` | 500 Internal Server Error | 그 외 서버 내부 오류 |
//!
//! 저장소 오류는 분류하지 않고 원본 메시지와 함께 클라이언트 오류(400)로 전달합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "detail": "User not found" }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 에러
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연결, 쿼리 실행 등 저장소 계층 오류
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 데이터 검증 오류
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스를 찾을 수 없음
    ///
    /// 메시지는 그대로 클라이언트에 전달됩니다.
    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자 조회 실패 시 공통으로 사용하는 404 에러
    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found".to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        } else {
            log::debug!("요청 실패 ({}): {}", status, self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "detail": self.to_string()
            }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
