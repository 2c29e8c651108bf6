//! Postgres-backed sink with insert-if-absent semantics.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use super::{RateSink, SinkReport};
use crate::domain::Observation;
use crate::error::EtlError;

pub struct PostgresSink {
    pool: PgPool,
}

impl PostgresSink {
    /// Connect to the destination database.
    pub async fn connect(database_url: &str) -> Result<Self, EtlError> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateSink for PostgresSink {
    /// Conditional insert per record: an existing (effective_date, time_span)
    /// row wins and the new row is silently dropped. There is no run-level
    /// transaction; rows committed before a failure remain.
    async fn persist(&self, records: &[Observation]) -> Result<SinkReport, EtlError> {
        let mut report = SinkReport::default();

        for rec in records {
            let result = sqlx::query(
                r#"
                INSERT INTO eia_diesel_fuel_rates
                    (effective_date, time_span, fuel_rate, begin_dt, end_dt)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (effective_date, time_span) DO NOTHING
                "#,
            )
            .bind(rec.effective_date)
            .bind(rec.span.as_str())
            .bind(rec.rate)
            .bind(rec.begin_date)
            .bind(rec.end_date)
            .execute(&self.pool)
            .await?;

            if result.rows_affected() > 0 {
                report.inserted += 1;
            } else {
                report.deduplicated += 1;
            }
        }

        info!(
            inserted = report.inserted,
            deduplicated = report.deduplicated,
            "batch persisted"
        );
        Ok(report)
    }
}
