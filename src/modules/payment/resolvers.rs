use super::{
    repository::Payment,
    routes::{create_payment, get_payments},
};
use crate::{
    modules::{
        auth::Auth,
        restaurant::repository::{restaurant, Restaurant},
        user::repository::{user, Role, User},
    },
    types::Context as AppContext,
};
use async_graphql::{ComplexObject, Context, Object};
use std::sync::Arc;

#[ComplexObject]
impl Payment {
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        user::find_by_id(&app.db_conn.pool, self.user_id.clone())
            .await
            .map_err(|_| async_graphql::Error::new("Unexpected error"))
    }

    async fn restaurant(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Restaurant>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        restaurant::find_by_id(&app.db_conn.pool, self.restaurant_id.clone())
            .await
            .map_err(|_| async_graphql::Error::new("Unexpected error"))
    }
}

#[derive(Default)]
pub struct PaymentQuery;

#[Object]
impl PaymentQuery {
    async fn get_payments(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<get_payments::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(get_payments::service(app.clone(), auth).await.into())
    }
}

#[derive(Default)]
pub struct PaymentMutation;

#[Object]
impl PaymentMutation {
    async fn create_payment(
        &self,
        ctx: &Context<'_>,
        input: create_payment::types::request::Body,
    ) -> async_graphql::Result<create_payment::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(create_payment::service(
            app.clone(),
            create_payment::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }
}
