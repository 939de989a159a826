use super::types::response;
use crate::{modules::restaurant::repository::category, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    category::find_all(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchCategories)
        .map(response::Success::Categories)
}
