use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Verification {
    pub id: String,
    pub code: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

fn generate_code() -> String {
    Ulid::new().to_string().to_lowercase()
}

/// Issues a fresh code for the user, replacing any code still pending.
pub async fn create<'e, E: PgExecutor<'e>>(e: E, user_id: String) -> Result<Verification> {
    sqlx::query_as::<_, Verification>(
        "
        INSERT INTO verifications (id, code, user_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE SET
            code = EXCLUDED.code,
            updated_at = NOW()
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(generate_code())
    .bind(&user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a verification for user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_code<'e, E: PgExecutor<'e>>(
    e: E,
    code: String,
) -> Result<Option<Verification>> {
    sqlx::query_as::<_, Verification>("SELECT * FROM verifications WHERE code = $1")
        .bind(code)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_code: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM verifications WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting verification {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_lowercase() {
        let first = generate_code();
        let second = generate_code();
        assert_ne!(first, second);
        assert_eq!(first, first.to_lowercase());
        assert_eq!(first.len(), 26);
    }
}
