use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        restaurant::repository::{category, restaurant},
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

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateRestaurant
    })?;

    let category = category::get_or_create(&mut *tx, payload.body.category_name)
        .await
        .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    let restaurant = restaurant::create(
        &mut *tx,
        restaurant::CreateRestaurantPayload {
            name: payload.body.name,
            cover_img: payload.body.cover_img,
            address: payload.body.address,
            category_id: category.id,
            owner_id: auth.user.id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateRestaurant
    })?;

    Ok(response::Success::RestaurantCreated(restaurant.id))
}
