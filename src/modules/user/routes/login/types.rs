pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "LoginInput")]
    pub struct Body {
        #[validate(email(message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
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
        LoggedIn(String),
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UserNotFound,
        WrongPassword,
        FailedToLogin,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "LoginOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub token: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::LoggedIn(token)) => Self {
                    ok: true,
                    error: None,
                    token: Some(token),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(match err {
                        Error::FailedToValidate(errors) => validation::into_message(&errors),
                        Error::UserNotFound => String::from("User not found"),
                        Error::WrongPassword => String::from("Wrong password"),
                        Error::FailedToLogin => String::from("Can't login now"),
                    }),
                    token: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
