use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::job_offer::JobOffer;
use crate::domain::pagination::{Page, PageRequest, Sort, SortProperty};
use crate::domain::repositories::{JobOfferRepository, RepositoryError};

/// PostgreSQL implementation of JobOfferRepository
///
/// Stores job offers in the `job_offer` table. Identifiers come from the
/// table's `BIGSERIAL` sequence.
pub struct PostgresJobOfferRepository {
    pool: PgPool,
}

impl PostgresJobOfferRepository {
    /// Creates a new PostgresJobOfferRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, offer: &JobOffer) -> Result<JobOffer, RepositoryError> {
        let saved = sqlx::query_as::<_, JobOffer>(
            r#"
            INSERT INTO job_offer (title, location, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, location, description
            "#,
        )
        .bind(&offer.title)
        .bind(&offer.location)
        .bind(&offer.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}

/// ORDER BY clause for a listing
///
/// Column names come from `SortProperty`, never from client input. Ties are
/// broken by id so consecutive pages do not overlap.
fn order_by_clause(sort: Option<&Sort>) -> String {
    match sort {
        None => "id ASC".to_string(),
        Some(sort) if sort.property == SortProperty::Id => format!("id {}", sort.direction),
        Some(sort) => format!("{} {}, id ASC", sort.property.column(), sort.direction),
    }
}

#[async_trait]
impl JobOfferRepository for PostgresJobOfferRepository {
    async fn save(&self, offer: JobOffer) -> Result<JobOffer, RepositoryError> {
        let Some(id) = offer.id else {
            return self.insert(&offer).await;
        };

        let updated = sqlx::query_as::<_, JobOffer>(
            r#"
            UPDATE job_offer
            SET title = $2, location = $3, description = $4
            WHERE id = $1
            RETURNING id, title, location, description
            "#,
        )
        .bind(id)
        .bind(&offer.title)
        .bind(&offer.location)
        .bind(&offer.description)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(updated) => Ok(updated),
            None => {
                tracing::debug!(id, "No job offer to update, inserting a new one");
                self.insert(&offer).await
            }
        }
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Page<JobOffer>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT id, title, location, description
            FROM job_offer
            ORDER BY {}
            LIMIT $1 OFFSET $2
            "#,
            order_by_clause(page.sort())
        );

        let offers = sqlx::query_as::<_, JobOffer>(&sql)
            .bind(i64::from(page.size()))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_offer")
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(offers, page, u64::try_from(total).unwrap_or(0)))
    }

    async fn find_one(&self, id: i64) -> Result<Option<JobOffer>, RepositoryError> {
        let offer = sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT id, title, location, description
            FROM job_offer
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(offer)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM job_offer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Delete matched no job offer");
        }

        Ok(())
    }
}
