pub mod request {
    use crate::modules::order::repository::OrderItemOption;
    use async_graphql::InputObject;
    use serde::Serialize;
    use validator::Validate;

    #[derive(InputObject, Serialize)]
    #[graphql(name = "CreateOrderItemInput")]
    pub struct Item {
        pub dish_id: String,
        #[graphql(default)]
        pub options: Vec<OrderItemOption>,
    }

    #[derive(InputObject, Validate)]
    #[graphql(name = "CreateOrderInput")]
    pub struct Body {
        pub restaurant_id: String,
        #[validate(length(min = 1, message = "An order needs at least one item"))]
        pub items: Vec<Item>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::utils::validation;
    use async_graphql::SimpleObject;
    use validator::ValidationErrors;

    pub enum Success {
        OrderCreated(String),
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        DishNotFound,
        FailedToCreateOrder,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "CreateOrderOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub order_id: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::OrderCreated(order_id)) => Self {
                    ok: true,
                    error: None,
                    order_id: Some(order_id),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(match err {
                        Error::FailedToValidate(errors) => validation::into_message(&errors),
                        Error::RestaurantNotFound => String::from("Restaurant not found"),
                        Error::DishNotFound => String::from("Dish not found"),
                        Error::FailedToCreateOrder => String::from("Unexpected error"),
                    }),
                    order_id: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
