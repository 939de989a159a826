use super::jwt;
use crate::{
    modules::{auth::Auth, user},
    types::Context,
};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
    UserNotFound,
}

type Result<T> = std::result::Result<T, Error>;

pub fn issue_token(ctx: Arc<Context>, user_id: String) -> Result<String> {
    jwt::sign(&ctx.jwt, user_id).map_err(|_| Error::UnexpectedError)
}

/// Resolves a token into the user it was issued for.
pub async fn authenticate(ctx: Arc<Context>, token: &str) -> Result<Auth> {
    let claims = jwt::verify(&ctx.jwt, token).map_err(|_| Error::InvalidToken)?;

    user::repository::user::find_by_id(&ctx.db_conn.pool, claims.id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::UserNotFound)
        .map(|user| Auth { user })
}
