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

    let restaurant = restaurant::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToCreateDish)?
        .ok_or(response::Error::RestaurantNotFound)?;

    if restaurant.owner_id != auth.user.id {
        return Err(response::Error::NotRestaurantOwner);
    }

    dish::create(
        &ctx.db_conn.pool,
        dish::CreateDishPayload {
            name: payload.body.name,
            price: payload.body.price,
            photo: payload.body.photo,
            description: payload.body.description,
            options: payload.body.options.unwrap_or_default(),
            restaurant_id: restaurant.id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateDish)
    .map(|_| response::Success::DishCreated)
}
