use super::types::{request, response};
use crate::{
    modules::{auth::Auth, restaurant::repository::restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    let existing = restaurant::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    if existing.owner_id != auth.user.id {
        return Err(response::Error::NotRestaurantOwner);
    }

    restaurant::delete_by_id(&ctx.db_conn.pool, existing.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)
        .map(|_| response::Success::RestaurantDeleted)
}
