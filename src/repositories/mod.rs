//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 구현체는 `Arc<dyn UserRepository>`로 서비스 계층에 주입됩니다.

pub mod users;
