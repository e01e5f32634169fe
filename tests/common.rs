use improfestivals_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::ImageService,
    domain::services::access::AccessPolicy,
    error::AppError,
    infra::repositories::{
        sqlite_festival_repo::SqliteFestivalRepo,
        sqlite_show_repo::SqliteShowRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

pub const ADMIN_USER: &str = "usr_admin";

pub struct MockImageService;

#[async_trait]
impl ImageService for MockImageService {
    async fn ingest(
        &self,
        file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
        directory: &str
    ) -> Result<String, AppError> {
        Ok(format!("https://storage.example.com/{}/{}", directory, file_name))
    }
}

#[derive(Serialize)]
struct TestClaims {
    iss: String,
    sub: String,
    aud: String,
    exp: usize,
    iat: usize,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let pub_key_pem = include_str!("keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            public_base_url: "https://www.improfestivals.com".to_string(),
            admin_user: Some(ADMIN_USER.to_string()),
            jwt_public_key: pub_key_pem.to_string(),
            image_service_url: "http://localhost".to_string(),
            image_service_token: "token".to_string(),
        };

        let access = AccessPolicy::new(config.admin_user.clone());

        let state = Arc::new(AppState {
            config: config.clone(),
            festival_repo: Arc::new(SqliteFestivalRepo::new(pool.clone())),
            show_repo: Arc::new(SqliteShowRepo::new(pool.clone())),
            image_service: Arc::new(MockImageService),
            access,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Mints a session token the way the external identity provider
    /// would, signed with the test keypair under `tests/keys/`.
    pub fn token_for(&self, user_id: &str) -> String {
        let priv_key_pem = include_str!("keys/test_private.pem");
        let now = Utc::now().timestamp() as usize;

        let claims = TestClaims {
            iss: "https://id.improfestivals.test".to_string(),
            sub: user_id.to_string(),
            aud: "improfestivals-web".to_string(),
            exp: now + 3600,
            iat: now,
        };

        let key = EncodingKey::from_ed_pem(priv_key_pem.as_bytes())
            .expect("invalid test private key");
        encode(&Header::new(Algorithm::EdDSA), &claims, &key)
            .expect("failed to sign test token")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
