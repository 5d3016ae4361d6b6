//! PostgreSQL billing record repository implementation

use async_trait::async_trait;
use rehearsal_types::{BillingRecord, UserId};
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::BillingRecordRow;
use crate::repo::BillingRecordRepository;

/// PostgreSQL billing record repository
#[derive(Clone)]
pub struct PgBillingRecordRepository {
    pool: PgPool,
}

impl PgBillingRecordRepository {
    /// Create a new billing record repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BillingRecordRepository for PgBillingRecordRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> DbResult<Option<BillingRecord>> {
        let row = sqlx::query_as::<_, BillingRecordRow>(
            r#"
            SELECT user_id, billing_customer_ref, billing_subscription_ref, status,
                   current_period_start, current_period_end, trial_end,
                   cancel_at_period_end, created_at, updated_at
            FROM billing_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(BillingRecord::try_from).transpose()
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

/// Connection-level failures become `Unavailable`; everything else stays a query error
fn map_sqlx_error(err: sqlx::Error) -> DbError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %err, "Billing record store unreachable");
            DbError::Unavailable(err.to_string())
        }
        other => DbError::Sqlx(other),
    }
}
