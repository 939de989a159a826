pub mod request {
    pub struct Payload {
        pub user_id: String,
    }
}

pub mod response {
    use crate::modules::user::repository::User;
    use async_graphql::SimpleObject;

    pub enum Success {
        User(User),
    }

    pub enum Error {
        UserNotFound,
        FailedToFetchUser,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "UserProfileOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub user: Option<User>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::User(user)) => Self {
                    ok: true,
                    error: None,
                    user: Some(user),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(String::from(match err {
                        Error::UserNotFound => "User not found",
                        Error::FailedToFetchUser => "Unexpected error",
                    })),
                    user: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
