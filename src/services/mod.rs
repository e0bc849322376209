//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자를 통해 리포지토리를 주입받으며, 핸들러에는
//! `actix_web::web::Data`로 공유됩니다.

pub mod users;
