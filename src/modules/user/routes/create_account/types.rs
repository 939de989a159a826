pub mod request {
    use crate::modules::user::repository::Role;
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "CreateAccountInput")]
    pub struct Body {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
        pub password: String,
        pub role: Role,
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
        AccountCreated,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        FailedToCreateAccount,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "CreateAccountOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::AccountCreated) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::EmailAlreadyInUse) => {
                    Some(String::from("There is a user with that email already"))
                }
                Err(Error::FailedToCreateAccount) => Some(String::from("Couldn't create account")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
