pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "CreatePaymentInput")]
    pub struct Body {
        #[validate(length(min = 1, message = "Transaction id is required"))]
        pub transaction_id: String,
        pub restaurant_id: String,
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
        PaymentCreated,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        NotRestaurantOwner,
        FailedToCreatePayment,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "CreatePaymentOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::PaymentCreated) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::RestaurantNotFound) => Some(String::from("Restaurant not found")),
                Err(Error::NotRestaurantOwner) => {
                    Some(String::from("You are not allowed to do this"))
                }
                Err(Error::FailedToCreatePayment) => Some(String::from("Unexpected error")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
