pub mod request {
    use crate::modules::order::repository::OrderStatus;
    use async_graphql::InputObject;

    #[derive(InputObject)]
    #[graphql(name = "EditOrderInput")]
    pub struct Body {
        pub id: String,
        pub status: OrderStatus,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use async_graphql::SimpleObject;

    pub enum Success {
        OrderUpdated,
    }

    pub enum Error {
        OrderNotFound,
        NotInvolved,
        StatusNotAllowed,
        FailedToEditOrder,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "EditOrderOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::OrderUpdated) => None,
                Err(Error::OrderNotFound) => Some("Order not found"),
                Err(Error::NotInvolved) => Some("You can't see that"),
                Err(Error::StatusNotAllowed) => Some("You can't do that"),
                Err(Error::FailedToEditOrder) => Some("Unexpected error"),
            };

            Self {
                ok: error.is_none(),
                error: error.map(String::from),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
