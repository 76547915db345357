//! Wedding event repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::WeddingEventEntity;
use crate::metrics::QueryTimer;

/// Repository for wedding-event database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List all events of a wedding in display order.
    pub async fn list_for_wedding(
        &self,
        wedding_id: Uuid,
    ) -> Result<Vec<WeddingEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events_for_wedding");
        let result = sqlx::query_as::<_, WeddingEventEntity>(
            r#"
            SELECT id, wedding_id, name, starts_at, ends_at, venue_name, venue_address,
                   dress_code, sort_order
            FROM wedding_events
            WHERE wedding_id = $1
            ORDER BY sort_order, starts_at
            "#,
        )
        .bind(wedding_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: EventRepository tests require a database connection and are
    // covered by integration tests
}
