use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{auth, password},
        user::repository::user,
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

    let credentials = user::find_credentials_by_email(
        &ctx.db_conn.pool,
        payload.body.email.trim().to_lowercase(),
    )
    .await
    .map_err(|_| response::Error::FailedToLogin)?
    .ok_or(response::Error::UserNotFound)?;

    if !password::verify(&payload.body.password, &credentials.password) {
        return Err(response::Error::WrongPassword);
    }

    auth::issue_token(ctx, credentials.id)
        .map_err(|_| response::Error::FailedToLogin)
        .map(response::Success::LoggedIn)
}
