use super::types::{request, response};
use crate::{
    modules::{
        auth::Auth,
        order::{
            events::OrderEvent,
            repository::{order, OrderStatus},
            service as order_service,
        },
        user::repository::Role,
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
        .map_err(|_| response::Error::FailedToEditOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let owner_id = order_service::find_restaurant_owner_id(ctx.clone(), &existing)
        .await
        .map_err(|_| response::Error::FailedToEditOrder)?;

    if !order_service::can_see(&auth.user, &existing, owner_id.as_deref()) {
        return Err(response::Error::NotInvolved);
    }

    let status = payload.body.status;
    if !order_service::can_set_status(auth.user.role, status) {
        return Err(response::Error::StatusNotAllowed);
    }

    let updated = order::update_status_by_id(&ctx.db_conn.pool, existing.id, status)
        .await
        .map_err(|_| response::Error::FailedToEditOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if auth.user.role == Role::Owner && status == OrderStatus::Cooked {
        ctx.order_events.publish(OrderEvent::Cooked {
            order: updated.clone(),
        });
    }
    ctx.order_events.publish(OrderEvent::Updated {
        order: updated,
        owner_id,
    });

    Ok(response::Success::OrderUpdated)
}
