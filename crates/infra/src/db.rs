//! Postgres adapters: connection pool and read-only lookups.
//!
//! The platform's tables are owned by the main application; the queries here only
//! read `users(id BIGINT, email TEXT, actor_id TEXT, is_active BOOLEAN)`.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgPoolOptions};
use tracing::{debug, instrument};

use oncc_core::ActorId;
use oncc_validators::{LookupError, UserLookup};

pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Postgres-backed [`UserLookup`]: one `ANY($1)` query per validation.
#[derive(Debug, Clone)]
pub struct PgUserLookup {
    pool: PgPool,
}

impl PgUserLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLookup for PgUserLookup {
    async fn exists(&self, id: i64) -> Result<bool, LookupError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| LookupError::new(e.to_string()))?;
        Ok(found)
    }

    #[instrument(skip(self, ids), fields(count = ids.len()), err)]
    async fn existing(&self, ids: &[i64]) -> Result<BTreeSet<i64>, LookupError> {
        let rows: Vec<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| LookupError::new(e.to_string()))?;

        debug!(found = rows.len(), "user existence checked");
        Ok(rows.into_iter().collect())
    }
}

/// E-mail addresses of the active managers of every actor.
pub async fn load_actor_manager_emails(pool: &PgPool) -> Result<Vec<(ActorId, String)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT actor_id, email
        FROM users
        WHERE actor_id IS NOT NULL
          AND email IS NOT NULL
          AND is_active
        ORDER BY actor_id, email
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let actor_id: String = row.try_get("actor_id")?;
        let email: String = row.try_get("email")?;
        // Blank actor ids cannot be addressed; skip them.
        if let Ok(actor_id) = ActorId::new(actor_id) {
            out.push((actor_id, email));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncc_validators::validate_user_assignment;
    use serde_json::json;

    async fn pool_from_env() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
        connect_database(&url).await.expect("failed to connect to Postgres")
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a Postgres with a users table"]
    async fn pg_lookup_reports_missing_users() {
        let pool = pool_from_env().await;
        let lookup = PgUserLookup::new(pool);

        let err = validate_user_assignment(&json!({ "userIds": [i64::MAX] }), &lookup)
            .await
            .unwrap_err();
        assert!(err.field_errors().is_some());
    }
}
