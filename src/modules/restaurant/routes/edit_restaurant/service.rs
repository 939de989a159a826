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

    let existing = restaurant::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id.clone())
        .await
        .map_err(|_| response::Error::FailedToEditRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    if existing.owner_id != auth.user.id {
        return Err(response::Error::NotRestaurantOwner);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToEditRestaurant
    })?;

    let category_id = match payload.body.category_name {
        Some(category_name) => Some(
            category::get_or_create(&mut *tx, category_name)
                .await
                .map_err(|_| response::Error::FailedToEditRestaurant)?
                .id,
        ),
        None => None,
    };

    restaurant::update_by_id(
        &mut *tx,
        existing.id,
        restaurant::UpdateRestaurantPayload {
            name: payload.body.name,
            cover_img: payload.body.cover_img,
            address: payload.body.address,
            category_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToEditRestaurant)?
    .ok_or(response::Error::RestaurantNotFound)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToEditRestaurant
    })?;

    Ok(response::Success::RestaurantUpdated)
}
