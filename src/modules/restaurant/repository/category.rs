use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::sync::LazyLock;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, SimpleObject, FromRow)]
#[graphql(complex)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub cover_img: Option<String>,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid slug regex"));

pub fn slugify(name: &str) -> String {
    WHITESPACE.replace_all(&normalize_name(name), "-").into_owned()
}

/// Returns the category with the slug derived from `name`, creating it first
/// when it does not exist yet.
pub async fn get_or_create<'e, E: PgExecutor<'e>>(e: E, name: String) -> Result<Category> {
    let name = normalize_name(&name);
    let slug = slugify(&name);

    // the no-op update makes RETURNING yield the existing row too
    sqlx::query_as::<_, Category>(
        "
        INSERT INTO categories (id, name, slug)
        VALUES ($1, $2, $3)
        ON CONFLICT (slug) DO UPDATE SET
            slug = EXCLUDED.slug
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(name)
    .bind(&slug)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while getting or creating category {}: {}",
            slug,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching category {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_slug<'e, E: PgExecutor<'e>>(e: E, slug: String) -> Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
        .bind(&slug)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching category by slug {}: {}",
                slug,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Category>> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching categories: {}", err);
            Error::UnexpectedError
        })
}

pub async fn count_restaurants<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM restaurants WHERE category_id = $1")
        .bind(&id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while counting restaurants of category {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_collapse_whitespace() {
        assert_eq!(slugify("Korean BBQ"), "korean-bbq");
        assert_eq!(slugify("  Fast \t  Food  "), "fast-food");
        assert_eq!(slugify("pizza"), "pizza");
    }

    #[test]
    fn names_are_trimmed_and_lowercased() {
        assert_eq!(normalize_name("  Korean BBQ "), "korean bbq");
    }
}
