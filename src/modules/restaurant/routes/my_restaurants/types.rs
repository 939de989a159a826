pub mod response {
    use crate::modules::restaurant::repository::Restaurant;
    use async_graphql::SimpleObject;

    pub enum Success {
        Restaurants(Vec<Restaurant>),
    }

    pub enum Error {
        FailedToFetchRestaurants,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "MyRestaurantsOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurants: Option<Vec<Restaurant>>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurants(restaurants)) => Self {
                    ok: true,
                    error: None,
                    restaurants: Some(restaurants),
                },
                Err(Error::FailedToFetchRestaurants) => Self {
                    ok: false,
                    error: Some(String::from("Unexpected error")),
                    restaurants: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
