use super::types::response;
use crate::{
    modules::{auth::Auth, restaurant::repository::restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    restaurant::find_many_by_owner_id(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurants)
        .map(response::Success::Restaurants)
}
