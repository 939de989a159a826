pub mod request {
    use async_graphql::InputObject;

    #[derive(InputObject)]
    #[graphql(name = "TakeOrderInput")]
    pub struct Body {
        pub id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use async_graphql::SimpleObject;

    pub enum Success {
        OrderTaken,
    }

    pub enum Error {
        OrderNotFound,
        AlreadyHasDriver,
        FailedToTakeOrder,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "TakeOrderOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::OrderTaken) => None,
                Err(Error::OrderNotFound) => Some("Order not found"),
                Err(Error::AlreadyHasDriver) => Some("This order already has a driver"),
                Err(Error::FailedToTakeOrder) => Some("Unexpected error"),
            };

            Self {
                ok: error.is_none(),
                error: error.map(String::from),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
