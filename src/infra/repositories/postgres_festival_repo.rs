use crate::domain::{models::festival::Festival, ports::FestivalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

pub struct PostgresFestivalRepo {
    pool: PgPool,
}

impl PostgresFestivalRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FestivalRepository for PostgresFestivalRepo {
    async fn create(&self, festival: &Festival) -> Result<Festival, AppError> {
        sqlx::query_as::<_, Festival>(
            r#"INSERT INTO festivals (
                id, user_id, name, country, city, date_from, date_until,
                website, instagram, poster, description, slogan, languages,
                accommodation_offered, mixer_shows, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
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
            "SELECT * FROM festivals WHERE id = $1",
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
            "SELECT * FROM festivals WHERE user_id = $1",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, festival: &Festival) -> Result<Option<Festival>, AppError> {
        sqlx::query_as::<_, Festival>(
            r#"UPDATE festivals SET
                name=$1, country=$2, city=$3, date_from=$4, date_until=$5,
                website=$6, instagram=$7, poster=$8, description=$9, slogan=$10,
                languages=$11, accommodation_offered=$12, mixer_shows=$13, updated_at=$14
               WHERE id=$15 RETURNING *"#
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
            "DELETE FROM festivals WHERE id = $1 RETURNING *",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
