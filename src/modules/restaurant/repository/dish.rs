use crate::utils::money::Money;
use async_graphql::{InputObject, SimpleObject};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgExecutor};
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, SimpleObject, InputObject)]
#[graphql(input_name = "DishChoiceInput")]
pub struct DishChoice {
    pub name: String,
    pub extra: Option<Money>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, SimpleObject, InputObject)]
#[graphql(input_name = "DishOptionInput")]
pub struct DishOption {
    pub name: String,
    pub choices: Option<Vec<DishChoice>>,
    pub extra: Option<Money>,
}

#[derive(Serialize, Deserialize, Clone, Debug, SimpleObject, FromRow)]
#[graphql(complex)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub photo: Option<String>,
    pub description: String,
    #[graphql(skip)]
    pub options: Json<Vec<DishOption>>,
    pub restaurant_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateDishPayload {
    pub name: String,
    pub price: Money,
    pub photo: Option<String>,
    pub description: String,
    pub options: Vec<DishOption>,
    pub restaurant_id: String,
}

pub struct UpdateDishPayload {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<DishOption>>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateDishPayload) -> Result<Dish> {
    sqlx::query_as::<_, Dish>(
        "
        INSERT INTO dishes (id, name, price, photo, description, options, restaurant_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.price)
    .bind(payload.photo)
    .bind(payload.description)
    .bind(Json(payload.options))
    .bind(payload.restaurant_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a dish: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Dish>> {
    sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching dish {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Dishes of a restaurant with the given id; dishes of other restaurants are
/// never returned.
pub async fn find_by_id_and_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    restaurant_id: String,
) -> Result<Option<Dish>> {
    sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE id = $1 AND restaurant_id = $2")
        .bind(&id)
        .bind(restaurant_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching dish {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<Dish>> {
    sqlx::query_as::<_, Dish>(
        "SELECT * FROM dishes WHERE restaurant_id = $1 ORDER BY created_at ASC",
    )
    .bind(&restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching the menu of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateDishPayload,
) -> Result<Option<Dish>> {
    sqlx::query_as::<_, Dish>(
        "
        UPDATE dishes SET
            name = COALESCE($1, name),
            price = COALESCE($2, price),
            photo = COALESCE($3, photo),
            description = COALESCE($4, description),
            options = COALESCE($5, options),
            updated_at = NOW()
        WHERE
            id = $6
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.price)
    .bind(payload.photo)
    .bind(payload.description)
    .bind(payload.options.map(Json))
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a dish by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM dishes WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting dish {}: {}", id, err);
            Error::UnexpectedError
        })
}
