//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 저장소 클라이언트를 한 번 생성하여 서비스에 주입한 뒤
//! Actix-web HTTP 서버를 구동합니다. 서버가 종료되면 저장소 클라이언트를 정리합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_service_backend::config::{MongoConfig, RateLimitConfig, ServerConfig, StoreBackend};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let (user_repo, database) = initialize_store().await;

    // 시작 시 연결 확인. 결과는 로그로만 남기고 요청 처리는 기다리지 않는다
    spawn_startup_ping(user_repo.clone());

    let user_service = web::Data::new(UserService::new(user_repo));

    let result = start_http_server(user_service).await;

    if let Some(database) = database {
        database.shutdown().await;
    }

    info!("👋 서버가 종료되었습니다");
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => {
            if dotenv::from_filename(".env.dev").is_err() {
                // 개발 환경에서는 기본 .env로 대체
                dotenv().ok();
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소를 생성합니다
///
/// MongoDB를 사용하는 경우 종료 시 정리할 수 있도록 `Database` 핸들도 함께 반환합니다.
/// 연결 문자열이 잘못되어도 애플리케이션은 종료되지 않습니다.
async fn initialize_store() -> (Arc<dyn UserRepository>, Option<Arc<Database>>) {
    match StoreBackend::from_env() {
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소를 사용합니다. 재시작 시 데이터가 사라집니다");
            let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
            (repo, None)
        }
        StoreBackend::Mongo => {
            info!("📡 MongoDB 클라이언트 생성 중...");

            let config = MongoConfig::from_env();
            let database = Arc::new(Database::connect(&config).await);
            let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database.clone()));

            (repo, Some(database))
        }
    }
}

/// 백그라운드에서 저장소 ping을 보내고 결과를 기록합니다
fn spawn_startup_ping(user_repo: Arc<dyn UserRepository>) {
    actix_web::rt::spawn(async move {
        match user_repo.ping().await {
            Ok(()) => info!("✅ 저장소 연결 확인 성공"),
            Err(e) => error!("❌ 저장소 연결 확인 실패: {}", e),
        }
    });
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버의 Origin을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
