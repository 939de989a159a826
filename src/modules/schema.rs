use super::{
    order::resolvers::{OrderMutation, OrderQuery, OrderSubscription},
    payment::resolvers::{PaymentMutation, PaymentQuery},
    restaurant::resolvers::{RestaurantMutation, RestaurantQuery},
    user::resolvers::{UserMutation, UserQuery},
};
use crate::types::Context;
use async_graphql::{MergedObject, Schema};
use std::sync::Arc;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery, RestaurantQuery, OrderQuery, PaymentQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, RestaurantMutation, OrderMutation, PaymentMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, OrderSubscription>;

pub fn build_schema(ctx: Arc<Context>) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        OrderSubscription,
    )
    .data(ctx)
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        modules::{
            auth::Auth,
            order::{
                events::OrderEvent,
                repository::{Order, OrderStatus},
            },
            user::repository::{Role, User},
        },
        types::testing,
        utils::money::Money,
    };
    use async_graphql::{Request, Response};
    use chrono::Utc;
    use futures::StreamExt;
    use std::time::Duration;

    fn auth(role: Role) -> Auth {
        Auth {
            user: User {
                id: String::from("01HZCALLER"),
                email: String::from("caller@test.com"),
                role,
                verified: true,
                created_at: Utc::now().naive_utc(),
                updated_at: None,
            },
        }
    }

    fn first_error(response: &Response) -> Option<String> {
        response.errors.first().map(|error| error.message.clone())
    }

    fn field(response: &Response, path: &[&str]) -> serde_json::Value {
        let mut value = response.data.clone().into_json().unwrap();
        for key in path {
            value = value[*key].clone();
        }
        value
    }

    #[tokio::test]
    async fn anonymous_callers_are_forbidden() {
        let schema = build_schema(testing::context());

        let response = schema.execute("{ me { id } }").await;
        assert_eq!(first_error(&response).as_deref(), Some("Forbidden resource"));

        let response = schema
            .execute(r#"mutation { editOrder(input: { id: "1", status: Cooked }) { ok } }"#)
            .await;
        assert_eq!(first_error(&response).as_deref(), Some("Forbidden resource"));
    }

    #[tokio::test]
    async fn me_returns_the_caller() {
        let schema = build_schema(testing::context());

        let response = schema
            .execute(Request::new("{ me { email role } }").data(auth(Role::Delivery)))
            .await;
        assert!(response.errors.is_empty());
        assert_eq!(field(&response, &["me", "email"]), "caller@test.com");
        assert_eq!(field(&response, &["me", "role"]), "Delivery");
    }

    #[tokio::test]
    async fn roles_are_enforced() {
        let schema = build_schema(testing::context());

        let create_restaurant = r#"mutation {
            createRestaurant(input: { name: "Burger Shop", coverImg: "img", address: "Seoul", categoryName: "Burgers" }) { ok }
        }"#;
        let response = schema
            .execute(Request::new(create_restaurant).data(auth(Role::Client)))
            .await;
        assert_eq!(first_error(&response).as_deref(), Some("Forbidden resource"));

        let take_order = r#"mutation { takeOrder(input: { id: "1" }) { ok } }"#;
        let response = schema
            .execute(Request::new(take_order).data(auth(Role::Owner)))
            .await;
        assert_eq!(first_error(&response).as_deref(), Some("Forbidden resource"));

        let create_order = r#"mutation { createOrder(input: { restaurantId: "1", items: [] }) { ok } }"#;
        let response = schema
            .execute(Request::new(create_order).data(auth(Role::Delivery)))
            .await;
        assert_eq!(first_error(&response).as_deref(), Some("Forbidden resource"));
    }

    #[tokio::test]
    async fn invalid_input_is_reported_before_touching_the_database() {
        let schema = build_schema(testing::context());

        let response = schema
            .execute(
                r#"mutation {
                    createAccount(input: { email: "not-an-email", password: "short", role: Client }) { ok error }
                }"#,
            )
            .await;
        assert!(response.errors.is_empty());
        assert_eq!(field(&response, &["createAccount", "ok"]), false);
        assert_eq!(
            field(&response, &["createAccount", "error"]),
            "email: Invalid email address; password: Password must be at least 8 characters long"
        );

        let create_dish = r#"mutation {
            createDish(input: { restaurantId: "1", name: "Pizza", price: "12.5", description: "no" }) { ok error }
        }"#;
        let response = schema
            .execute(Request::new(create_dish).data(auth(Role::Owner)))
            .await;
        assert_eq!(field(&response, &["createDish", "ok"]), false);
        assert_eq!(
            field(&response, &["createDish", "error"]),
            "description: Description must be between 4 and 144 characters long"
        );

        let edit_dish = r#"mutation { editDish(input: { dishId: "1", price: "-1" }) { ok error } }"#;
        let response = schema
            .execute(Request::new(edit_dish).data(auth(Role::Owner)))
            .await;
        assert_eq!(field(&response, &["editDish", "ok"]), false);
        assert_eq!(
            field(&response, &["editDish", "error"]),
            "price: Price can't be negative"
        );

        let create_order = r#"mutation { createOrder(input: { restaurantId: "1", items: [] }) { ok error } }"#;
        let response = schema
            .execute(Request::new(create_order).data(auth(Role::Client)))
            .await;
        assert_eq!(field(&response, &["createOrder", "ok"]), false);
        assert_eq!(
            field(&response, &["createOrder", "error"]),
            "items: An order needs at least one item"
        );

        let response = schema
            .execute("{ allRestaurants(input: { page: 0 }) { ok error } }")
            .await;
        assert_eq!(field(&response, &["allRestaurants", "ok"]), false);
        assert_eq!(
            field(&response, &["allRestaurants", "error"]),
            "page: Page must be at least 1"
        );
    }

    #[tokio::test]
    async fn subscriptions_require_the_right_role() {
        let schema = build_schema(testing::context());

        let mut stream = schema.execute_stream(
            Request::new("subscription { pendingOrders { id } }").data(auth(Role::Client)),
        );
        let response = stream.next().await.unwrap();
        assert_eq!(first_error(&response).as_deref(), Some("Forbidden resource"));
    }

    #[tokio::test]
    async fn drivers_hear_about_cooked_orders() {
        let ctx = testing::context();
        let schema = build_schema(ctx.clone());

        let mut stream = schema.execute_stream(
            Request::new("subscription { cookedOrders { id status total } }")
                .data(auth(Role::Delivery)),
        );

        let order = Order {
            id: String::from("01HZORDER"),
            customer_id: Some(String::from("client")),
            driver_id: None,
            restaurant_id: None,
            total: Money::from(12),
            status: OrderStatus::Cooked,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };

        let (response, _) = tokio::join!(stream.next(), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            ctx.order_events.publish(OrderEvent::Pending {
                order: order.clone(),
                owner_id: String::from("owner"),
            });
            ctx.order_events.publish(OrderEvent::Cooked { order });
        });

        let response = response.unwrap();
        assert!(response.errors.is_empty());
        assert_eq!(field(&response, &["cookedOrders", "id"]), "01HZORDER");
        assert_eq!(field(&response, &["cookedOrders", "status"]), "Cooked");
        assert_eq!(field(&response, &["cookedOrders", "total"]), "12");
    }
}
