use super::types::{request, response};
use crate::{
    modules::{
        auth::{service::password, Auth},
        notification,
        user::repository::{user, verification},
    },
    types::Context,
};
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

    let email = payload
        .body
        .email
        .map(|email| email.trim().to_lowercase())
        .filter(|email| *email != auth.user.email);

    if let Some(email) = &email {
        let existing = user::find_by_email(&ctx.db_conn.pool, email.clone())
            .await
            .map_err(|_| response::Error::FailedToEditProfile)?;
        if existing.is_some_and(|existing| existing.id != auth.user.id) {
            return Err(response::Error::EmailAlreadyInUse);
        }
    }

    let password = match payload.body.password {
        Some(plain_text) => Some(
            password::hash(&plain_text).map_err(|_| response::Error::FailedToEditProfile)?,
        ),
        None => None,
    };

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToEditProfile
    })?;

    let user = user::update_by_id(
        &mut *tx,
        auth.user.id.clone(),
        user::UpdateUserPayload {
            verified: email.as_ref().map(|_| false),
            email: email.clone(),
            password,
        },
    )
    .await
    .map_err(|err| match err {
        user::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        user::Error::UnexpectedError => response::Error::FailedToEditProfile,
    })?
    .ok_or(response::Error::FailedToEditProfile)?;

    let verification = match email {
        Some(_) => Some(
            verification::create(&mut *tx, user.id.clone())
                .await
                .map_err(|_| response::Error::FailedToEditProfile)?,
        ),
        None => None,
    };

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToEditProfile
    })?;

    if let Some(verification) = verification {
        tokio::spawn(notification::service::send(
            ctx.clone(),
            notification::service::Notification::verification_requested(
                user.email,
                verification.code,
            ),
        ));
    }

    Ok(response::Success::ProfileUpdated)
}
