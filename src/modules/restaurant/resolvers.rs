use super::{
    repository::{category, dish, restaurant, Category, Dish, DishOption, Restaurant},
    routes::{
        all_categories, all_restaurants, category as category_route, create_dish,
        create_restaurant, delete_dish, delete_restaurant, edit_dish, edit_restaurant,
        my_restaurant, my_restaurants, restaurant as restaurant_route, search_restaurant,
    },
};
use crate::{
    modules::{
        auth::Auth,
        user::repository::{user, Role, User},
    },
    types::Context as AppContext,
};
use async_graphql::{ComplexObject, Context, Object};
use std::sync::Arc;

fn unexpected<E: std::fmt::Debug>(err: E) -> async_graphql::Error {
    tracing::error!("Failed to resolve a relation: {:?}", err);
    async_graphql::Error::new("Unexpected error")
}

#[ComplexObject]
impl Restaurant {
    async fn category(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Category>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        match &self.category_id {
            Some(category_id) => category::find_by_id(&app.db_conn.pool, category_id.clone())
                .await
                .map_err(unexpected),
            None => Ok(None),
        }
    }

    async fn owner(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        user::find_by_id(&app.db_conn.pool, self.owner_id.clone())
            .await
            .map_err(unexpected)
    }

    async fn menu(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Dish>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        dish::find_many_by_restaurant_id(&app.db_conn.pool, self.id.clone())
            .await
            .map_err(unexpected)
    }
}

#[ComplexObject]
impl Category {
    async fn restaurant_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i64> {
        let app = ctx.data::<Arc<AppContext>>()?;
        category::count_restaurants(&app.db_conn.pool, self.id.clone())
            .await
            .map_err(unexpected)
    }
}

#[ComplexObject]
impl Dish {
    async fn options(&self) -> Vec<DishOption> {
        self.options.0.clone()
    }

    async fn restaurant(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Restaurant>> {
        let app = ctx.data::<Arc<AppContext>>()?;
        restaurant::find_by_id(&app.db_conn.pool, self.restaurant_id.clone())
            .await
            .map_err(unexpected)
    }
}

#[derive(Default)]
pub struct RestaurantQuery;

#[Object]
impl RestaurantQuery {
    async fn all_restaurants(
        &self,
        ctx: &Context<'_>,
        input: all_restaurants::types::request::Body,
    ) -> async_graphql::Result<all_restaurants::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(all_restaurants::service(
            app.clone(),
            all_restaurants::types::request::Payload { body: input },
        )
        .await
        .into())
    }

    async fn restaurant(
        &self,
        ctx: &Context<'_>,
        input: restaurant_route::types::request::Body,
    ) -> async_graphql::Result<restaurant_route::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(restaurant_route::service(
            app.clone(),
            restaurant_route::types::request::Payload { body: input },
        )
        .await
        .into())
    }

    async fn search_restaurant(
        &self,
        ctx: &Context<'_>,
        input: search_restaurant::types::request::Body,
    ) -> async_graphql::Result<search_restaurant::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(search_restaurant::service(
            app.clone(),
            search_restaurant::types::request::Payload { body: input },
        )
        .await
        .into())
    }

    async fn my_restaurants(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<my_restaurants::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(my_restaurants::service(app.clone(), auth).await.into())
    }

    async fn my_restaurant(
        &self,
        ctx: &Context<'_>,
        input: my_restaurant::types::request::Body,
    ) -> async_graphql::Result<my_restaurant::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(my_restaurant::service(
            app.clone(),
            my_restaurant::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn all_categories(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<all_categories::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(all_categories::service(app.clone()).await.into())
    }

    async fn category(
        &self,
        ctx: &Context<'_>,
        input: category_route::types::request::Body,
    ) -> async_graphql::Result<category_route::types::response::Output> {
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(category_route::service(
            app.clone(),
            category_route::types::request::Payload { body: input },
        )
        .await
        .into())
    }
}

#[derive(Default)]
pub struct RestaurantMutation;

#[Object]
impl RestaurantMutation {
    async fn create_restaurant(
        &self,
        ctx: &Context<'_>,
        input: create_restaurant::types::request::Body,
    ) -> async_graphql::Result<create_restaurant::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(create_restaurant::service(
            app.clone(),
            create_restaurant::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn edit_restaurant(
        &self,
        ctx: &Context<'_>,
        input: edit_restaurant::types::request::Body,
    ) -> async_graphql::Result<edit_restaurant::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(edit_restaurant::service(
            app.clone(),
            edit_restaurant::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn delete_restaurant(
        &self,
        ctx: &Context<'_>,
        input: delete_restaurant::types::request::Body,
    ) -> async_graphql::Result<delete_restaurant::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(delete_restaurant::service(
            app.clone(),
            delete_restaurant::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn create_dish(
        &self,
        ctx: &Context<'_>,
        input: create_dish::types::request::Body,
    ) -> async_graphql::Result<create_dish::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(create_dish::service(
            app.clone(),
            create_dish::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn edit_dish(
        &self,
        ctx: &Context<'_>,
        input: edit_dish::types::request::Body,
    ) -> async_graphql::Result<edit_dish::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(edit_dish::service(
            app.clone(),
            edit_dish::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }

    async fn delete_dish(
        &self,
        ctx: &Context<'_>,
        input: delete_dish::types::request::Body,
    ) -> async_graphql::Result<delete_dish::types::response::Output> {
        let auth = Auth::with_role(ctx, Role::Owner)?;
        let app = ctx.data::<Arc<AppContext>>()?;

        Ok(delete_dish::service(
            app.clone(),
            delete_dish::types::request::Payload { body: input },
            auth,
        )
        .await
        .into())
    }
}
