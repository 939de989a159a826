use super::{
    repository::User,
    routes::{create_account, edit_profile, login, user_profile, verify_email},
};
use crate::{modules::auth::Auth, types::Context as AppContext};
use async_graphql::{Context, Object};
use std::sync::Arc;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        Ok(Auth::any(ctx)?.user)
    }

    async fn user_profile(
        &self,
        ctx: &Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<user_profile::types::response::Output> {
        Auth::any(ctx)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(
            user_profile::service(app.clone(), user_profile::types::request::Payload { user_id })
                .await
                .into(),
        )
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_account(
        &self,
        ctx: &Context<'_>,
        input: create_account::types::request::Body,
    ) -> async_graphql::Result<create_account::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(
            create_account::service(
                app.clone(),
                create_account::types::request::Payload { body: input },
            )
            .await
            .into(),
        )
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        input: login::types::request::Body,
    ) -> async_graphql::Result<login::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(
            login::service(app.clone(), login::types::request::Payload { body: input })
                .await
                .into(),
        )
    }

    async fn edit_profile(
        &self,
        ctx: &Context<'_>,
        input: edit_profile::types::request::Body,
    ) -> async_graphql::Result<edit_profile::types::response::Output> {
        let auth = Auth::any(ctx)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(edit_profile::service(
            app.clone(),
            edit_profile::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn verify_email(
        &self,
        ctx: &Context<'_>,
        input: verify_email::types::request::Body,
    ) -> async_graphql::Result<verify_email::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(
            verify_email::service(
                app.clone(),
                verify_email::types::request::Payload { body: input },
            )
            .await
            .into(),
        )
    }
}
