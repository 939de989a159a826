use super::types::response;
use crate::{
    modules::{auth::Auth, payment::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    repository::find_many_by_user_id(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchPayments)
        .map(response::Success::Payments)
}
