use super::types::{request, response};
use crate::{
    modules::restaurant::repository::{category, restaurant},
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

    let category = category::find_by_slug(&ctx.db_conn.pool, payload.body.slug)
        .await
        .map_err(|_| response::Error::FailedToLoadCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    let restaurants = restaurant::find_many(
        &ctx.db_conn.pool,
        Pagination::page(payload.body.page),
        restaurant::FindManyFilters {
            search: None,
            category_id: Some(category.id.clone()),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToLoadCategory)?;

    Ok(response::Success::Category(category, restaurants))
}
