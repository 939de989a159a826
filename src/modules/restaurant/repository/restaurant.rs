use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgExecutor};
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, SimpleObject, FromRow)]
#[graphql(complex)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cover_img: String,
    pub address: String,
    pub category_id: Option<String>,
    pub owner_id: String,
    pub is_promoted: bool,
    pub promoted_until: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub cover_img: String,
    pub address: String,
    pub category_id: String,
    pub owner_id: String,
}

pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub cover_img: Option<String>,
    pub address: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Default)]
pub struct FindManyFilters {
    pub search: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (id, name, cover_img, address, category_id, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.cover_img)
    .bind(payload.address)
    .bind(payload.category_id)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id_and_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    owner_id: String,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1 AND owner_id = $2")
        .bind(&id)
        .bind(owner_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "SELECT * FROM restaurants WHERE owner_id = $1 ORDER BY created_at DESC",
    )
    .bind(&owner_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching restaurants of owner {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Escapes `LIKE` wildcards so a search term only ever matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Deserialize)]
struct DatabaseCountedResult {
    data: Vec<Restaurant>,
    total: u32,
}

/// One page of restaurants, promoted ones first.
pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
    filters: FindManyFilters,
) -> Result<Paginated<Restaurant>> {
    sqlx::query_scalar::<_, Json<DatabaseCountedResult>>(
        "
        WITH filtered_data AS (
            SELECT *
            FROM restaurants
            WHERE
                name ILIKE CONCAT('%', COALESCE($3, ''), '%') ESCAPE '\\'
                AND ($4::VARCHAR IS NULL OR category_id = $4)
        ),
        page AS (
            SELECT *
            FROM filtered_data
            ORDER BY is_promoted DESC, created_at DESC
            LIMIT $1
            OFFSET $2
        )
        SELECT JSONB_BUILD_OBJECT(
            'data', COALESCE(
                (
                    SELECT JSONB_AGG(ROW_TO_JSON(page) ORDER BY page.is_promoted DESC, page.created_at DESC)
                    FROM page
                ),
                '[]'::jsonb
            ),
            'total', (SELECT COUNT(id) FROM filtered_data)
        ) AS result
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .bind(filters.search.as_deref().map(escape_like))
    .bind(filters.category_id)
    .fetch_one(e)
    .await
    .map(|Json(counted)| {
        Paginated::new(
            counted.data,
            counted.total,
            pagination.page,
            pagination.per_page,
        )
    })
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch many restaurants: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            name = COALESCE($1, name),
            cover_img = COALESCE($2, cover_img),
            address = COALESCE($3, address),
            category_id = COALESCE($4, category_id),
            updated_at = NOW()
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.cover_img)
    .bind(payload.address)
    .bind(payload.category_id)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn promote_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    until: NaiveDateTime,
) -> Result<()> {
    sqlx::query(
        "
        UPDATE restaurants SET
            is_promoted = true,
            promoted_until = $1,
            updated_at = NOW()
        WHERE
            id = $2
        ",
    )
    .bind(until)
    .bind(&id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while promoting restaurant {}: {}", id, err);
        Error::UnexpectedError
    })
}

/// Returns how many restaurants lost their promotion.
pub async fn unpromote_expired<'e, E: PgExecutor<'e>>(e: E, now: NaiveDateTime) -> Result<u64> {
    sqlx::query(
        "
        UPDATE restaurants SET
            is_promoted = false,
            promoted_until = NULL,
            updated_at = NOW()
        WHERE
            is_promoted = true
            AND promoted_until < $1
        ",
    )
    .bind(now)
    .execute(e)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!("Error occurred while expiring promotions: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_terms_are_left_alone() {
        assert_eq!(escape_like("burger"), "burger");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("%"), "\\%");
        assert_eq!(escape_like("_"), "\\_");
        assert_eq!(escape_like("50% off_now\\"), "50\\% off\\_now\\\\");
    }
}
