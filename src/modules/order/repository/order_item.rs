use async_graphql::{InputObject, SimpleObject};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgExecutor};
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

/// An option picked by the customer, by name, with the chosen choice if the
/// option has choices.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, SimpleObject, InputObject)]
#[graphql(input_name = "OrderItemOptionInput")]
pub struct OrderItemOption {
    pub name: String,
    pub choice: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, SimpleObject, FromRow)]
#[graphql(complex)]
pub struct OrderItem {
    pub id: String,
    pub dish_id: Option<String>,
    #[graphql(skip)]
    pub options: Json<Vec<OrderItemOption>>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateOrderItemPayload {
    pub dish_id: String,
    pub options: Vec<OrderItemOption>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateOrderItemPayload,
) -> Result<OrderItem> {
    sqlx::query_as::<_, OrderItem>(
        "
        INSERT INTO order_items (id, dish_id, options)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.dish_id)
    .bind(Json(payload.options))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Vec<OrderItem>> {
    sqlx::query_as::<_, OrderItem>(
        "
        SELECT order_items.*
        FROM order_items
        INNER JOIN orders_order_items ON orders_order_items.order_item_id = order_items.id
        WHERE orders_order_items.order_id = $1
        ORDER BY order_items.created_at ASC
        ",
    )
    .bind(&order_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching the items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}
