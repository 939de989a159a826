pub mod response {
    use crate::modules::payment::repository::Payment;
    use async_graphql::SimpleObject;

    pub enum Success {
        Payments(Vec<Payment>),
    }

    pub enum Error {
        FailedToFetchPayments,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "GetPaymentsOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub payments: Option<Vec<Payment>>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Payments(payments)) => Self {
                    ok: true,
                    error: None,
                    payments: Some(payments),
                },
                Err(Error::FailedToFetchPayments) => Self {
                    ok: false,
                    error: Some(String::from("Unexpected error")),
                    payments: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
