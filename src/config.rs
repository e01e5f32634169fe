use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub public_base_url: String,
    pub admin_user: Option<String>,
    pub jwt_public_key: String, // Ed25519 public key (PEM) of the identity provider
    pub image_service_url: String,
    pub image_service_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "https://www.improfestivals.com".to_string()),
            admin_user: env::var("ADMIN_USER").ok().filter(|v| !v.is_empty()),
            jwt_public_key: env::var("JWT_PUBLIC_KEY").expect("JWT_PUBLIC_KEY must be set (Ed25519 Public Key)"),
            image_service_url: env::var("IMAGE_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8100/api/v1/images".to_string()),
            image_service_token: env::var("IMAGE_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
        }
    }
}
