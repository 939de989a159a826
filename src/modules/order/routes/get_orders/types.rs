pub mod request {
    use crate::modules::order::repository::OrderStatus;
    use async_graphql::InputObject;

    #[derive(InputObject, Default)]
    #[graphql(name = "GetOrdersInput")]
    pub struct Body {
        pub status: Option<OrderStatus>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use async_graphql::SimpleObject;

    pub enum Success {
        Orders(Vec<Order>),
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "GetOrdersOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub orders: Option<Vec<Order>>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Orders(orders)) => Self {
                    ok: true,
                    error: None,
                    orders: Some(orders),
                },
                Err(Error::FailedToFetchOrders) => Self {
                    ok: false,
                    error: Some(String::from("Unexpected error")),
                    orders: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
