use super::types::{request, response};
use crate::{
    modules::{
        auth::service::password,
        notification,
        user::repository::{user, verification},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.body.email.trim().to_lowercase();

    if user::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateAccount)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let hashed_password = password::hash(&payload.body.password)
        .map_err(|_| response::Error::FailedToCreateAccount)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateAccount
    })?;

    let user = user::create(
        &mut *tx,
        user::CreateUserPayload {
            email,
            password: hashed_password,
            role: payload.body.role,
        },
    )
    .await
    .map_err(|err| match err {
        user::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        user::Error::UnexpectedError => response::Error::FailedToCreateAccount,
    })?;

    let verification = verification::create(&mut *tx, user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateAccount)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateAccount
    })?;

    tokio::spawn(notification::service::send(
        ctx.clone(),
        notification::service::Notification::verification_requested(
            user.email,
            verification.code,
        ),
    ));

    Ok(response::Success::AccountCreated)
}
