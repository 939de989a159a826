pub mod request {
    use async_graphql::InputObject;

    #[derive(InputObject)]
    #[graphql(name = "RestaurantInput")]
    pub struct Body {
        pub restaurant_id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::restaurant::repository::Restaurant;
    use async_graphql::SimpleObject;

    pub enum Success {
        Restaurant(Restaurant),
    }

    pub enum Error {
        RestaurantNotFound,
        FailedToFetchRestaurant,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "RestaurantOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurant: Option<Restaurant>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurant(restaurant)) => Self {
                    ok: true,
                    error: None,
                    restaurant: Some(restaurant),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(String::from(match err {
                        Error::RestaurantNotFound => "Restaurant not found",
                        Error::FailedToFetchRestaurant => "Unexpected error",
                    })),
                    restaurant: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
