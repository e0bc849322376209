//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 한 곳에서 관리합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # MongoDB Atlas
//! export MONGODB_USERNAME="ada"
//! export MONGODB_PASSWORD="secret"
//! export CLUSTER_NAME="Cluster0"
//! export UNIQUE_URL_ID="abc123"
//! export DATABASE_NAME="users_db"
//!
//! # 로컬 MongoDB를 사용할 경우 (Atlas 템플릿 무시)
//! export MONGODB_URI="mongodb://localhost:27017"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! ```

pub mod data_config;

pub use data_config::*;
