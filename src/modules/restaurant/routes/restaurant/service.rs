use super::types::{request, response};
use crate::{modules::restaurant::repository::restaurant, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    restaurant::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)
        .map(response::Success::Restaurant)
}
