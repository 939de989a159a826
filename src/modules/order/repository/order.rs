use async_graphql::{Enum, SimpleObject};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

use crate::utils::money::Money;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Enum, sqlx::Type)]
#[graphql(rename_items = "PascalCase")]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

#[derive(Serialize, Deserialize, Clone, Debug, SimpleObject, FromRow)]
#[graphql(complex)]
pub struct Order {
    pub id: String,
    pub customer_id: Option<String>,
    pub driver_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateOrderPayload {
    pub customer_id: String,
    pub restaurant_id: String,
    pub total: Money,
    pub item_ids: Vec<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Inserts the order and links it to its already inserted items. Run it inside
/// a transaction together with the item inserts.
pub async fn create(
    tx: &mut sqlx::PgConnection,
    payload: CreateOrderPayload,
) -> Result<Order> {
    let order = sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (id, customer_id, restaurant_id, total, status)
        VALUES ($1, $2, $3, $4, 'Pending')
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.customer_id)
    .bind(payload.restaurant_id)
    .bind(payload.total)
    .fetch_one(&mut *tx)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })?;

    sqlx::query(
        "
        INSERT INTO orders_order_items (order_id, order_item_id)
        SELECT $1, UNNEST($2::VARCHAR[])
        ",
    )
    .bind(&order.id)
    .bind(payload.item_ids)
    .execute(&mut *tx)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while linking items to order {}: {}",
            order.id,
            err
        );
        Error::UnexpectedError
    })?;

    Ok(order)
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_customer_id<'e, E: PgExecutor<'e>>(
    e: E,
    customer_id: String,
    status: Option<OrderStatus>,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "
        SELECT * FROM orders
        WHERE
            customer_id = $1
            AND ($2::order_status IS NULL OR status = $2)
        ORDER BY created_at DESC
        ",
    )
    .bind(&customer_id)
    .bind(status)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders of customer {}: {}",
            customer_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_driver_id<'e, E: PgExecutor<'e>>(
    e: E,
    driver_id: String,
    status: Option<OrderStatus>,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "
        SELECT * FROM orders
        WHERE
            driver_id = $1
            AND ($2::order_status IS NULL OR status = $2)
        ORDER BY created_at DESC
        ",
    )
    .bind(&driver_id)
    .bind(status)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders of driver {}: {}",
            driver_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
    status: Option<OrderStatus>,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "
        SELECT orders.*
        FROM orders
        INNER JOIN restaurants ON restaurants.id = orders.restaurant_id
        WHERE
            restaurants.owner_id = $1
            AND ($2::order_status IS NULL OR orders.status = $2)
        ORDER BY orders.created_at DESC
        ",
    )
    .bind(&owner_id)
    .bind(status)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders of owner {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_status_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: OrderStatus,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            status = $1,
            updated_at = NOW()
        WHERE
            id = $2
        RETURNING *
        ",
    )
    .bind(status)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while updating the status of order {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// Only succeeds while the order has no driver; `None` means another driver
/// got there first.
pub async fn assign_driver_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    driver_id: String,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            driver_id = $1,
            updated_at = NOW()
        WHERE
            id = $2
            AND driver_id IS NULL
        RETURNING *
        ",
    )
    .bind(driver_id)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while assigning a driver to order {}: {}", id, err);
        Error::UnexpectedError
    })
}
