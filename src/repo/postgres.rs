use crate::domain::error::RepositoryError;
use crate::domain::payee::Payee;
use crate::domain::status::PayeeStatus;
use crate::repo::PayeeRepository;
use anyhow::anyhow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgPayeeRepository {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl PayeeRepository for PgPayeeRepository {
    async fn save(&self, payee: &Payee) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO payees (id, name, email, bank_account, status, psp_reference, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(payee.id)
        .bind(payee.name.clone())
        .bind(payee.email.clone())
        .bind(payee.bank_account.clone())
        .bind(payee.status.as_str())
        .bind(payee.psp_reference.clone())
        .bind(payee.created_at)
        .bind(payee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists(payee.id)
            }
            _ => RepositoryError::Backend(e.into()),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, payee_id: Uuid) -> Result<Option<Payee>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, bank_account, status, psp_reference, created_at, updated_at
            FROM payees
            WHERE id = $1
            "#,
        )
        .bind(payee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Backend(e.into()))?;

        row.map(|r| {
            let status: String = r.get("status");
            let status = PayeeStatus::parse(&status)
                .ok_or_else(|| RepositoryError::Backend(anyhow!("unknown payee status {status}")))?;
            Ok(Payee {
                id: r.get("id"),
                name: r.get("name"),
                email: r.get("email"),
                bank_account: r.get("bank_account"),
                status,
                psp_reference: r.get("psp_reference"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
        })
        .transpose()
    }

    async fn update(&self, payee: &Payee) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE payees
            SET status = $2, psp_reference = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(payee.id)
        .bind(payee.status.as_str())
        .bind(payee.psp_reference.clone())
        .bind(payee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Backend(e.into()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(payee.id));
        }

        Ok(())
    }
}
