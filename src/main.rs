mod app;
mod jobs;
mod modules;
mod types;
mod utils;

use crate::{
    app::App,
    types::{Config, Context, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);

    let http = App::new(ctx.clone()).serve();
    let job_monitor = async {
        if let Err(err) = jobs::monitor(ctx.clone()).run().await {
            tracing::error!("Job monitor stopped: {}", err);
        }
    };

    tokio::join!(http, job_monitor);
}
