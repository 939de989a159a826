pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "VerifyEmailInput")]
    pub struct Body {
        #[validate(length(min = 1, message = "Code is required"))]
        pub code: String,
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
        EmailVerified,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        VerificationNotFound,
        FailedToVerifyEmail,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "VerifyEmailOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::EmailVerified) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::VerificationNotFound) => Some(String::from("Verification not found")),
                Err(Error::FailedToVerifyEmail) => Some(String::from("Could not verify email")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
