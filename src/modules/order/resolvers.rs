use super::{
    events,
    repository::{order_item, Order, OrderItem, OrderItemOption},
    routes::{create_order, edit_order, get_order, get_orders, take_order},
};
use crate::{
    modules::{
        auth::Auth,
        restaurant::repository::{dish, restaurant, Dish, Restaurant},
        user::repository::{user, Role, User},
    },
    types::Context as AppContext,
};
use async_graphql::{ComplexObject, Context, InputObject, Object, Subscription};
use futures::{future, Stream, StreamExt};
use std::sync::Arc;

fn unexpected<E: std::fmt::Debug>(err: E) -> async_graphql::Error {
    tracing::error!("Failed to resolve a relation: {:?}", err);
    async_graphql::Error::new("Unexpected error")
}

async fn find_user(
    ctx: &Context<'_>,
    id: Option<&String>,
) -> async_graphql::Result<Option<User>> {
    let app = ctx.data::<Arc<AppContext>>()?;
    match id {
        Some(id) => user::find_by_id(&app.db_conn.pool, id.clone())
            .await
            .map_err(unexpected),
        None => Ok(None),
    }
}

#[ComplexObject]
impl Order {
    async fn customer(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        find_user(ctx, self.customer_id.as_ref()).await
    }

    async fn driver(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        find_user(ctx, self.driver_id.as_ref()).await
    }

    async fn restaurant(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Restaurant>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        match &self.restaurant_id {
            Some(restaurant_id) => restaurant::find_by_id(&app.db_conn.pool, restaurant_id.clone())
                .await
                .map_err(unexpected),
            None => Ok(None),
        }
    }

    async fn items(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<OrderItem>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        order_item::find_many_by_order_id(&app.db_conn.pool, self.id.clone())
            .await
            .map_err(unexpected)
    }
}

#[ComplexObject]
impl OrderItem {
    async fn options(&self) -> Vec<OrderItemOption> {
        self.options.0.clone()
    }

    async fn dish(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Dish>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        match &self.dish_id {
            Some(dish_id) => dish::find_by_id(&app.db_conn.pool, dish_id.clone())
                .await
                .map_err(unexpected),
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct OrderQuery;

#[Object]
impl OrderQuery {
    async fn get_orders(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] input: get_orders::types::request::Body,
    ) -> async_graphql::Result<get_orders::types::response::Output> {
        let auth = Auth::any(ctx)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(get_orders::service(
            app.clone(),
            get_orders::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn get_order(
        &self,
        ctx: &Context<'_>,
        input: get_order::types::request::Body,
    ) -> async_graphql::Result<get_order::types::response::Output> {
        let auth = Auth::any(ctx)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(get_order::service(
            app.clone(),
            get_order::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }
}

#[derive(Default)]
pub struct OrderMutation;

#[Object]
impl OrderMutation {
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        input: create_order::types::request::Body,
    ) -> async_graphql::Result<create_order::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Client)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(create_order::service(
            app.clone(),
            create_order::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn edit_order(
        &self,
        ctx: &Context<'_>,
        input: edit_order::types::request::Body,
    ) -> async_graphql::Result<edit_order::types::response::Output> {
        let auth = Auth::any(ctx)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(edit_order::service(
            app.clone(),
            edit_order::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn take_order(
        &self,
        ctx: &Context<'_>,
        input: take_order::types::request::Body,
    ) -> async_graphql::Result<take_order::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Delivery)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(take_order::service(
            app.clone(),
            take_order::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }
}

#[derive(InputObject)]
pub struct OrderUpdatesInput {
    pub id: String,
}

#[derive(Default)]
pub struct OrderSubscription;

#[Subscription]
impl OrderSubscription {
    async fn pending_orders(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<impl Stream<Item = Order>> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;
        let owner_id = auth.user.id;

        Ok(app
            .order_events
            .subscribe()
            .filter_map(move |event| future::ready(events::pending_for(event, &owner_id))))
    }

    async fn cooked_orders(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<impl Stream<Item = Order>> {
        Auth::with_role(ctx, Role::Delivery)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(app
            .order_events
            .subscribe()
            .filter_map(|event| future::ready(events::cooked(event))))
    }

    async fn order_updates(
        &self,
        ctx: &Context<'_>,
        input: OrderUpdatesInput,
    ) -> async_graphql::Result<impl Stream<Item = Order>> {
        let auth = Auth::any(ctx)?;
        let app = ctx.data::<Arc<AppContext>>()?;
        let user_id = auth.user.id;

        Ok(app.order_events.subscribe().filter_map(move |event| {
            future::ready(events::update_for(event, &input.id, &user_id))
        }))
    }
}
