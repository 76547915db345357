//! Guest repository for database operations.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::GuestEntity;
use crate::metrics::QueryTimer;

/// Repository for guest-related database operations.
#[derive(Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    /// Creates a new GuestRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a guest by id scoped to a wedding.
    ///
    /// The pair key is the whole point: a guest id from another wedding's
    /// invitation must not resolve here.
    pub async fn find_by_id_and_wedding(
        &self,
        id: Uuid,
        wedding_id: Uuid,
    ) -> Result<Option<GuestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_guest_by_id_and_wedding");
        let result = sqlx::query_as::<_, GuestEntity>(
            r#"
            SELECT id, wedding_id, full_name, email, attending, dietary_restrictions,
                   plus_one_allowed, plus_one_name, responded_at, created_at, updated_at
            FROM guests
            WHERE id = $1 AND wedding_id = $2
            "#,
        )
        .bind(id)
        .bind(wedding_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Record a guest's RSVP, stamping the response time.
    ///
    /// Returns the updated row, or `None` when the `(id, wedding_id)` pair
    /// does not match.
    pub async fn record_rsvp(
        &self,
        id: Uuid,
        wedding_id: Uuid,
        attending: bool,
        dietary_restrictions: Option<&str>,
        plus_one_name: Option<&str>,
    ) -> Result<Option<GuestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("record_guest_rsvp");
        let now = Utc::now();
        let result = sqlx::query_as::<_, GuestEntity>(
            r#"
            UPDATE guests
            SET attending = $3,
                dietary_restrictions = $4,
                plus_one_name = $5,
                responded_at = $6,
                updated_at = $6
            WHERE id = $1 AND wedding_id = $2
            RETURNING id, wedding_id, full_name, email, attending, dietary_restrictions,
                      plus_one_allowed, plus_one_name, responded_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(wedding_id)
        .bind(attending)
        .bind(dietary_restrictions)
        .bind(plus_one_name)
        .bind(now)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: GuestRepository tests require a database connection and are
    // covered by integration tests
}
