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
    restaurant::find_by_id_and_owner_id(&ctx.db_conn.pool, payload.body.id, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)
        .map(response::Success::Restaurant)
}
