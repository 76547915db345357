//! Website repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::WebsiteWithWeddingEntity;
use crate::metrics::QueryTimer;

/// Repository for website-config database operations.
#[derive(Clone)]
pub struct WebsiteRepository {
    pool: PgPool,
}

impl WebsiteRepository {
    /// Creates a new WebsiteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a website config by its wedding slug, joined with the wedding row.
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<WebsiteWithWeddingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_website_by_slug");
        let result = sqlx::query_as::<_, WebsiteWithWeddingEntity>(
            r#"
            SELECT
                c.id, c.wedding_id, c.status, c.visibility, c.is_password_protected,
                c.password_hash, c.welcome_message,
                c.show_hero, c.show_countdown, c.show_story, c.show_gallery,
                c.show_events, c.show_rsvp, c.show_chat,
                c.view_count, c.created_at, c.updated_at,
                w.slug, w.partner_names, w.wedding_date, w.venue_name, w.venue_address,
                w.is_active as wedding_is_active,
                w.created_at as wedding_created_at, w.updated_at as wedding_updated_at
            FROM website_configs c
            JOIN weddings w ON c.wedding_id = w.id
            WHERE w.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Increment the view counter for a website config.
    ///
    /// A single atomic update; callers never read the result beyond the
    /// affected-row count.
    pub async fn increment_view_count(&self, website_id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("increment_website_view_count");
        let result = sqlx::query(
            r#"
            UPDATE website_configs
            SET view_count = view_count + 1
            WHERE id = $1
            "#,
        )
        .bind(website_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: WebsiteRepository tests require a database connection and are
    // covered by integration tests
}
