//! Database Connection Management Module
//!
//! MongoDB 클라이언트의 생명주기를 관리합니다.
//! 클라이언트는 프로세스 시작 시 한 번 생성되어 `Arc<Database>`로 리포지토리에
//! 주입되고, HTTP 서버가 종료된 뒤 [`Database::shutdown`]으로 정리됩니다.
//!
//! 연결 문자열이 잘못되어 클라이언트를 만들 수 없더라도 애플리케이션은 계속
//! 실행됩니다. 이 경우 모든 저장소 작업은 `AppError::DatabaseError`로 실패하고
//! 헬스 체크는 `disconnected`를 보고합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::config::MongoConfig;
//! use user_service_backend::db::Database;
//!
//! let database = Arc::new(Database::connect(&MongoConfig::from_env()).await);
//! database.ping().await?;
//! // ...
//! database.shutdown().await;
//! ```

use log::{error, info};
use mongodb::{bson::doc, options::ClientOptions, Client};
use crate::config::MongoConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
pub struct Database {
    /// MongoDB 클라이언트. 연결 문자열 파싱에 실패하면 `None`
    client: Option<Client>,
    /// 사용할 데이터베이스 이름
    database_name: String,
    /// 클라이언트 생성 실패 원인
    init_error: Option<String>,
}

impl Database {
    /// 설정으로부터 MongoDB 클라이언트를 생성합니다.
    ///
    /// 드라이버는 실제 연결을 지연시키므로 이 함수는 서버에 접속하지 않습니다.
    /// 연결 상태 확인은 [`Database::ping`]을 사용합니다.
    pub async fn connect(config: &MongoConfig) -> Self {
        match Self::build_client(config).await {
            Ok(client) => {
                info!("MongoDB 클라이언트 생성 완료: database={}", config.database_name);

                Self {
                    client: Some(client),
                    database_name: config.database_name.clone(),
                    init_error: None,
                }
            }
            Err(e) => {
                error!("MongoDB 클라이언트 생성 실패: {}", e);

                Self {
                    client: None,
                    database_name: config.database_name.clone(),
                    init_error: Some(e.to_string()),
                }
            }
        }
    }

    async fn build_client(config: &MongoConfig) -> Result<Client, mongodb::error::Error> {
        let connection_string = config.connection_string();

        let mut client_options = ClientOptions::parse(connection_string.as_str()).await?;
        client_options.app_name = Some(config.app_name());

        Client::with_options(client_options)
    }

    fn client(&self) -> AppResult<&Client> {
        self.client.as_ref().ok_or_else(|| {
            AppError::DatabaseError(format!(
                "MongoDB client is unavailable: {}",
                self.init_error.as_deref().unwrap_or("not initialized")
            ))
        })
    }

    /// 작업 대상 `mongodb::Database`를 반환합니다.
    pub fn get_database(&self) -> AppResult<mongodb::Database> {
        Ok(self.client()?.database(&self.database_name))
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// `admin` 데이터베이스에 `ping` 명령을 보내 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.client()?
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(())
    }

    /// 클라이언트의 백그라운드 작업과 연결을 정리합니다.
    pub async fn shutdown(&self) {
        if let Some(client) = &self.client {
            info!("MongoDB 클라이언트 종료 중...");
            client.clone().shutdown().await;
        }
    }
}
