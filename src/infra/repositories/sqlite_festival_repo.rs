use crate::domain::{models::festival::Festival, ports::FestivalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::SqlitePool;

pub struct SqliteFestivalRepo {
    pool: SqlitePool,
}

impl SqliteFestivalRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FestivalRepository for SqliteFestivalRepo {
    async fn create(&self, festival: &Festival) -> Result<Festival, AppError> {
        sqlx::query_as::<_, Festival>(
            r#"INSERT INTO festivals (
                id, user_id, name, country, city, date_from, date_until,
                website, instagram, poster, description, slogan, languages,
                accommodation_offered, mixer_shows, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&festival.id)
            .bind(&festival.user_id)
            .bind(&festival.name)
            .bind(&festival.country)
            .bind(&festival.city)
            .bind(festival.date_from)
            .bind(festival.date_until)
            .bind(&festival.website)
            .bind(&festival.instagram)
            .bind(&festival.poster)
            .bind(&festival.description)
            .bind(&festival.slogan)
            .bind(Json(&festival.languages))
            .bind(festival.accommodation_offered)
            .bind(festival.mixer_shows)
            .bind(festival.created_at)
            .bind(festival.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Festival>, AppError> {
        sqlx::query_as::<_, Festival>(
            "SELECT * FROM festivals WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Festival>, AppError> {
        sqlx::query_as::<_, Festival>(
            "SELECT * FROM festivals",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Festival>, AppError> {
        sqlx::query_as::<_, Festival>(
            "SELECT * FROM festivals WHERE user_id = ?",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, festival: &Festival) -> Result<Option<Festival>, AppError> {
        sqlx::query_as::<_, Festival>(
            r#"UPDATE festivals SET
                name=?, country=?, city=?, date_from=?, date_until=?,
                website=?, instagram=?, poster=?, description=?, slogan=?,
                languages=?, accommodation_offered=?, mixer_shows=?, updated_at=?
               WHERE id=? RETURNING *"#
        )
            .bind(&festival.name)
            .bind(&festival.country)
            .bind(&festival.city)
            .bind(festival.date_from)
            .bind(festival.date_until)
            .bind(&festival.website)
            .bind(&festival.instagram)
            .bind(&festival.poster)
            .bind(&festival.description)
            .bind(&festival.slogan)
            .bind(Json(&festival.languages))
            .bind(festival.accommodation_offered)
            .bind(festival.mixer_shows)
            .bind(festival.updated_at)
            .bind(&festival.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<Option<Festival>, AppError> {
        sqlx::query_as::<_, Festival>(
            "DELETE FROM festivals WHERE id = ? RETURNING *",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
