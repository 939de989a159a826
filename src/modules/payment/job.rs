use crate::{
    modules::restaurant::repository::restaurant,
    types::{Context, SchedulableJob},
};
use chrono::Utc;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

async fn expire_promotions_job(ctx: Arc<Context>) -> Result<(), apalis::prelude::Error> {
    match restaurant::unpromote_expired(&ctx.db_conn.pool, Utc::now().naive_utc()).await {
        Ok(0) => (),
        Ok(expired) => tracing::info!("Expired the promotion of {} restaurants", expired),
        Err(err) => tracing::error!("Failed to expire promotions: {:?}", err),
    }

    Ok(())
}

fn setup_expire_promotions_job(
    ctx: Arc<Context>,
) -> Arc<
    dyn Fn()
            -> Pin<Box<dyn std::future::Future<Output = Result<(), apalis::prelude::Error>> + Send>>
        + Send
        + Sync,
> {
    Arc::new(move || {
        let ctx = ctx.clone();
        Box::pin(async move { expire_promotions_job(ctx).await })
    })
}

pub fn list(ctx: Arc<Context>) -> Vec<SchedulableJob> {
    vec![SchedulableJob {
        name: "payment::expire_promotions",
        schedule: apalis::cron::Schedule::from_str("0 * * * * *")
            .expect("Couldn't create schedule!"),
        job: setup_expire_promotions_job(ctx),
    }]
}
