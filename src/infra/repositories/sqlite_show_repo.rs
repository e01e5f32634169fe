use crate::domain::{models::show::Show, ports::ShowRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::SqlitePool;

pub struct SqliteShowRepo {
    pool: SqlitePool,
}

impl SqliteShowRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowRepository for SqliteShowRepo {
    async fn create(&self, show: &Show) -> Result<Show, AppError> {
        sqlx::query_as::<_, Show>(
            r#"INSERT INTO shows (
                id, user_id, name, show_starts, doors_open,
                website, instagram, poster, description, slogan, email,
                "groups", tickets_link, location_name, location_link, ticket_price,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&show.id)
            .bind(&show.user_id)
            .bind(&show.name)
            .bind(show.show_starts)
            .bind(show.doors_open)
            .bind(&show.website)
            .bind(&show.instagram)
            .bind(&show.poster)
            .bind(&show.description)
            .bind(&show.slogan)
            .bind(&show.email)
            .bind(Json(&show.groups))
            .bind(&show.tickets_link)
            .bind(&show.location_name)
            .bind(&show.location_link)
            .bind(&show.ticket_price)
            .bind(show.created_at)
            .bind(show.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Show>, AppError> {
        sqlx::query_as::<_, Show>(
            "SELECT * FROM shows WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Show>, AppError> {
        sqlx::query_as::<_, Show>(
            "SELECT * FROM shows ORDER BY show_starts DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Show>, AppError> {
        sqlx::query_as::<_, Show>(
            "SELECT * FROM shows WHERE user_id = ?",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, show: &Show) -> Result<Option<Show>, AppError> {
        sqlx::query_as::<_, Show>(
            r#"UPDATE shows SET
                name=?, show_starts=?, doors_open=?,
                website=?, instagram=?, poster=?, description=?, slogan=?, email=?,
                "groups"=?, tickets_link=?, location_name=?, location_link=?, ticket_price=?,
                updated_at=?
               WHERE id=? RETURNING *"#
        )
            .bind(&show.name)
            .bind(show.show_starts)
            .bind(show.doors_open)
            .bind(&show.website)
            .bind(&show.instagram)
            .bind(&show.poster)
            .bind(&show.description)
            .bind(&show.slogan)
            .bind(&show.email)
            .bind(Json(&show.groups))
            .bind(&show.tickets_link)
            .bind(&show.location_name)
            .bind(&show.location_link)
            .bind(&show.ticket_price)
            .bind(show.updated_at)
            .bind(&show.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<Option<Show>, AppError> {
        sqlx::query_as::<_, Show>(
            "DELETE FROM shows WHERE id = ? RETURNING *",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
