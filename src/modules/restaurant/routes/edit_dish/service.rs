use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        restaurant::repository::{dish, restaurant},
    },
    types::Context,
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

    let existing = dish::find_by_id(&ctx.db_conn.pool, payload.body.dish_id)
        .await
        .map_err(|_| response::Error::FailedToEditDish)?
        .ok_or(response::Error::DishNotFound)?;

    let restaurant = restaurant::find_by_id(&ctx.db_conn.pool, existing.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToEditDish)?
        .ok_or(response::Error::DishNotFound)?;

    if restaurant.owner_id != auth.user.id {
        return Err(response::Error::NotRestaurantOwner);
    }

    dish::update_by_id(
        &ctx.db_conn.pool,
        existing.id,
        dish::UpdateDishPayload {
            name: payload.body.name,
            price: payload.body.price,
            photo: payload.body.photo,
            description: payload.body.description,
            options: payload.body.options,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToEditDish)?
    .ok_or(response::Error::DishNotFound)
    .map(|_| response::Success::DishUpdated)
}
