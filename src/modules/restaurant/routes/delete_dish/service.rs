use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        restaurant::repository::{dish, restaurant},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    let existing = dish::find_by_id(&ctx.db_conn.pool, payload.body.dish_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)?
        .ok_or(response::Error::DishNotFound)?;

    let restaurant = restaurant::find_by_id(&ctx.db_conn.pool, existing.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)?
        .ok_or(response::Error::DishNotFound)?;

    if restaurant.owner_id != auth.user.id {
        return Err(response::Error::NotRestaurantOwner);
    }

    dish::delete_by_id(&ctx.db_conn.pool, existing.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)
        .map(|_| response::Success::DishDeleted)
}
