use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        order::{events::OrderEvent, repository::order, service as order_service},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    let existing = order::find_by_id(&ctx.db_conn.pool, payload.body.id)
        .await
        .map_err(|_| response::Error::FailedToTakeOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if existing.driver_id.is_some() {
        return Err(response::Error::AlreadyHasDriver);
    }

    let owner_id = order_service::find_restaurant_owner_id(ctx.clone(), &existing)
        .await
        .map_err(|_| response::Error::FailedToTakeOrder)?;

    let updated = order::assign_driver_by_id(&ctx.db_conn.pool, existing.id, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToTakeOrder)?
        .ok_or(response::Error::AlreadyHasDriver)?;

    ctx.order_events.publish(OrderEvent::Updated {
        order: updated,
        owner_id,
    });

    Ok(response::Success::OrderTaken)
}
