use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        order::{repository::order, service as order_service},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    let order = order::find_by_id(&ctx.db_conn.pool, payload.body.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let owner_id = order_service::find_restaurant_owner_id(ctx.clone(), &order)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?;

    if !order_service::can_see(&auth.user, &order, owner_id.as_deref()) {
        return Err(response::Error::NotInvolved);
    }

    Ok(response::Success::Order(order))
}
