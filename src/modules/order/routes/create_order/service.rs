use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        order::{
            events::OrderEvent,
            repository::{order, order_item},
            service as order_service,
        },
        restaurant::repository::{dish, restaurant},
    },
    types::Context,
    utils::money::Money,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant = restaurant::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let mut total = Money::zero();
    let mut priced_items = Vec::with_capacity(payload.body.items.len());
    for item in payload.body.items {
        let dish = dish::find_by_id_and_restaurant_id(
            &ctx.db_conn.pool,
            item.dish_id,
            restaurant.id.clone(),
        )
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .ok_or(response::Error::DishNotFound)?;

        total += &order_service::calculate_item_price(&dish, &item.options);
        priced_items.push(order_item::CreateOrderItemPayload {
            dish_id: dish.id,
            options: item.options,
        });
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    let mut item_ids = Vec::with_capacity(priced_items.len());
    for item in priced_items {
        let item = order_item::create(&mut *tx, item)
            .await
            .map_err(|_| response::Error::FailedToCreateOrder)?;
        item_ids.push(item.id);
    }

    let order = order::create(
        &mut *tx,
        order::CreateOrderPayload {
            customer_id: auth.user.id,
            restaurant_id: restaurant.id,
            total,
            item_ids,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    let order_id = order.id.clone();
    ctx.order_events.publish(OrderEvent::Pending {
        order,
        owner_id: restaurant.owner_id,
    });

    Ok(response::Success::OrderCreated(order_id))
}
