//! # Domain Module
//!
//! 사용자 리소스의 데이터 형태를 정의합니다.
//!
//! - [`entities`] - 저장소가 관리하는 사용자 엔티티와 식별자 값 타입
//! - [`dto`] - HTTP 요청/응답 형태 (생성, 수정, 전체 레코드)

pub mod entities;
pub mod dto;
