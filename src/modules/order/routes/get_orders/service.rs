use super::types::{request, response};
use crate::{
    modules::{auth::Auth, order::repository::order, user::repository::Role},
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    let status = payload.body.status;
    let user_id = auth.user.id;

    let orders = match auth.user.role {
        Role::Client => order::find_many_by_customer_id(&ctx.db_conn.pool, user_id, status).await,
        Role::Delivery => order::find_many_by_driver_id(&ctx.db_conn.pool, user_id, status).await,
        Role::Owner => order::find_many_by_owner_id(&ctx.db_conn.pool, user_id, status).await,
    };

    orders
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
