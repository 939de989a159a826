use super::types::{request, response};
use crate::{
    modules::restaurant::repository::restaurant,
    types::Context,
    utils::pagination::Pagination,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    restaurant::find_many(
        &ctx.db_conn.pool,
        Pagination::page(payload.body.page),
        restaurant::FindManyFilters {
            search: Some(payload.body.query),
            category_id: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToSearchRestaurants)
    .map(response::Success::Restaurants)
}
