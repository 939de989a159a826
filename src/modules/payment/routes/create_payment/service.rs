use super::types::{request, response};
use crate::{
    modules::{auth::Auth, payment::repository, restaurant::repository::restaurant},
    types::Context,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::Payload,
    auth: Auth,
) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant = restaurant::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToCreatePayment)?
        .ok_or(response::Error::RestaurantNotFound)?;

    if restaurant.owner_id != auth.user.id {
        return Err(response::Error::NotRestaurantOwner);
    }

    let promoted_until = Utc::now().naive_utc() + Duration::days(ctx.payment.promotion_days);

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreatePayment
    })?;

    repository::create(
        &mut *tx,
        repository::CreatePaymentPayload {
            transaction_id: payload.body.transaction_id,
            user_id: auth.user.id,
            restaurant_id: restaurant.id.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreatePayment)?;

    restaurant::promote_by_id(&mut *tx, restaurant.id, promoted_until)
        .await
        .map_err(|_| response::Error::FailedToCreatePayment)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreatePayment
    })?;

    Ok(response::Success::PaymentCreated)
}
