pub mod modules;
pub use modules::auth;
pub use modules::project;
pub use modules::resume;
pub use modules::uploads;
pub mod api;
pub mod health;
pub mod home;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::login_throttle_redis::RedisLoginThrottle;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::session_store_redis::RedisSessionStore;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::entities::OperatorIdentity;
use crate::auth::application::ports::outgoing::{
    LoginThrottle, PasswordHasher, SessionStore, TokenProvider,
};
use crate::auth::application::use_cases::{
    login_admin::LoginAdminService, logout_admin::LogoutAdminService,
    verify_session::VerifySessionService,
};
use crate::health::Backends;
use crate::project::adapter::outgoing::ProjectStorePostgres;
use crate::project::application::ports::incoming::use_cases::{
    ReadProjectsUseCase, WriteProjectsUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{ProjectEditorService, ProjectGatewayService};
use crate::resume::adapter::outgoing::{HttpDocumentFetcher, ResumeStorePostgres};
use crate::resume::application::ports::incoming::use_cases::{
    ReadResumesUseCase, WriteResumesUseCase,
};
use crate::resume::application::resume_use_cases::ResumeUseCases;
use crate::resume::application::service::{
    DownloadResumeService, ResumeEditorService, ResumeGatewayService,
};
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::config::AppConfig;
use crate::shared::live::ChangeFeed;
use crate::uploads::adapter::outgoing::GcsObjectStorage;
use crate::uploads::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::uploads::application::service::UploadMediaService;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub resume: ResumeUseCases,
    pub uploads: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub auth: AuthUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // `portfolio_backend hash-password <plain>` prints a value for ADMIN_PASSWORD_HASH
    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("hash-password") {
        let plain = args
            .get(2)
            .context("usage: portfolio_backend hash-password <password>")?;
        let hash = Argon2Hasher::from_env()
            .hash_password(plain)
            .await
            .context("failed to hash password")?;
        println!("{hash}");
        return Ok(());
    }

    info!("Starting application...");

    // Redis TLS connections need a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Database connection
    let db_arc = match config.database_url.clone() {
        Some(db_url) => Some(Arc::new(connect_database(db_url).await?)),
        None => {
            warn!("DATABASE_URL is not set: reads are empty and writes are refused");
            None
        }
    };

    // Redis connection
    let redis_arc = match config.redis_url.as_deref() {
        Some(redis_url) => Some(Arc::new(
            Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("failed to create Redis pool")?,
        )),
        None => {
            warn!("REDIS_URL is not set: admin sessions cannot be issued");
            None
        }
    };

    let feed = ChangeFeed::default();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Projects
    let project_gateway = Arc::new(ProjectGatewayService::new(
        Arc::new(ProjectStorePostgres::new(db_arc.clone())),
        feed.clone(),
    ));
    let project_read: Arc<dyn ReadProjectsUseCase + Send + Sync> = project_gateway.clone();
    let project_write: Arc<dyn WriteProjectsUseCase + Send + Sync> = project_gateway;
    let project = ProjectUseCases {
        editor: Arc::new(ProjectEditorService::new(
            project_read.clone(),
            project_write.clone(),
            clock.clone(),
        )),
        read: project_read,
        write: project_write,
    };

    // Resumes
    let resume_gateway = Arc::new(ResumeGatewayService::new(
        Arc::new(ResumeStorePostgres::new(db_arc.clone())),
        feed.clone(),
    ));
    let resume_read: Arc<dyn ReadResumesUseCase + Send + Sync> = resume_gateway.clone();
    let resume_write: Arc<dyn WriteResumesUseCase + Send + Sync> = resume_gateway;
    let fetcher = HttpDocumentFetcher::new().context("failed to build HTTP client")?;
    let resume = ResumeUseCases {
        editor: Arc::new(ResumeEditorService::new(
            resume_read.clone(),
            resume_write.clone(),
            clock.clone(),
        )),
        download: Arc::new(DownloadResumeService::new(
            resume_read.clone(),
            Arc::new(fetcher),
            config.owner_name.clone(),
        )),
        read: resume_read,
        write: resume_write,
    };

    // Uploads
    if config.gcs_bucket.is_none() {
        warn!("GCS_BUCKET is not set: uploads are refused");
    }
    let uploads = UploadMediaService::new(
        Arc::new(GcsObjectStorage::new(
            config.gcs_bucket.clone(),
            config.gcs_public_base_url.clone(),
        )),
        clock,
    );

    // Auth
    let operator = match (&config.admin_email, &config.admin_password_hash) {
        (Some(email), Some(hash)) => Some(OperatorIdentity::new(email, hash)),
        _ => {
            warn!("ADMIN_EMAIL or ADMIN_PASSWORD_HASH is not set: admin login is disabled");
            None
        }
    };
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    if jwt_config.is_none() {
        warn!("JWT_SECRET is not set: admin sessions cannot be issued or verified");
    }
    let token_provider: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(jwt_config));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let sessions: Arc<dyn SessionStore> = Arc::new(RedisSessionStore::new(redis_arc.clone()));
    let throttle: Arc<dyn LoginThrottle> = Arc::new(RedisLoginThrottle::new(
        redis_arc.clone(),
        config.login_max_attempts,
        config.login_window_secs,
    ));
    let auth = AuthUseCases {
        verify_session: Arc::new(VerifySessionService::new(
            token_provider.clone(),
            sessions.clone(),
            config.admin_email.clone(),
        )),
        login: Arc::new(LoginAdminService::new(
            operator,
            password_hasher,
            token_provider,
            throttle,
        )),
        logout: Arc::new(LogoutAdminService::new(sessions)),
    };

    let state = AppState {
        project,
        resume,
        uploads: Arc::new(uploads),
        auth,
    };
    let backends = Backends {
        db: db_arc,
        redis: redis_arc,
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(backends.clone()))
            .app_data(crate::shared::api::custom_json_config())
            .app_data(crate::uploads::adapter::incoming::web::routes::upload_payload_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(db_url: String) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Home
    cfg.service(crate::home::home_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::session_status_handler);
    // Projects (live before {id})
    cfg.service(crate::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::live_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::toggle_featured_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_editor_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::apply_project_editor_handler);
    // Resumes (live before {id})
    cfg.service(crate::resume::adapter::incoming::web::routes::list_resumes_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::live_resumes_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::download_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::delete_resume_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::get_resume_editor_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::apply_resume_editor_handler);
    // Uploads
    cfg.service(crate::uploads::adapter::incoming::web::routes::upload_media_handler);
    cfg.service(crate::uploads::adapter::incoming::web::routes::delete_media_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
