use super::types::{request, response};
use crate::{
    modules::user::repository::{user, verification},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let verification = verification::find_by_code(&ctx.db_conn.pool, payload.body.code)
        .await
        .map_err(|_| response::Error::FailedToVerifyEmail)?
        .ok_or(response::Error::VerificationNotFound)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToVerifyEmail
    })?;

    user::update_by_id(
        &mut *tx,
        verification.user_id.clone(),
        user::UpdateUserPayload {
            email: None,
            password: None,
            verified: Some(true),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToVerifyEmail)?
    .ok_or(response::Error::VerificationNotFound)?;

    verification::delete_by_id(&mut *tx, verification.id)
        .await
        .map_err(|_| response::Error::FailedToVerifyEmail)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToVerifyEmail
    })?;

    Ok(response::Success::EmailVerified)
}
