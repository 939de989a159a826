pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "EditProfileInput")]
    pub struct Body {
        #[validate(email(message = "Invalid email address"))]
        pub email: Option<String>,
        #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
        pub password: Option<String>,
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
        ProfileUpdated,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        FailedToEditProfile,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "EditProfileOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::ProfileUpdated) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::EmailAlreadyInUse) => {
                    Some(String::from("There are already users using this email"))
                }
                Err(Error::FailedToEditProfile) => Some(String::from("Can't edit profile now")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
