pub mod request {
    use async_graphql::InputObject;

    #[derive(InputObject)]
    #[graphql(name = "GetOrderInput")]
    pub struct Body {
        pub id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use async_graphql::SimpleObject;

    pub enum Success {
        Order(Order),
    }

    pub enum Error {
        OrderNotFound,
        NotInvolved,
        FailedToFetchOrder,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "GetOrderOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub order: Option<Order>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Order(order)) => Self {
                    ok: true,
                    error: None,
                    order: Some(order),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(String::from(match err {
                        Error::OrderNotFound => "Order not found",
                        Error::NotInvolved => "You can't see that",
                        Error::FailedToFetchOrder => "Unexpected error",
                    })),
                    order: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
