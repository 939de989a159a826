pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "SearchRestaurantInput")]
    pub struct Body {
        #[validate(length(min = 1, message = "Query can't be empty"))]
        pub query: String,
        #[graphql(default = 1)]
        #[validate(range(min = 1, message = "Page must be at least 1"))]
        pub page: u32,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::restaurant::repository::Restaurant,
        utils::{pagination::Paginated, validation},
    };
    use async_graphql::SimpleObject;
    use validator::ValidationErrors;

    pub enum Success {
        Restaurants(Paginated<Restaurant>),
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToSearchRestaurants,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "SearchRestaurantOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub total_pages: Option<u32>,
        pub total_results: Option<u32>,
        pub restaurants: Option<Vec<Restaurant>>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurants(restaurants)) => Self {
                    ok: true,
                    error: None,
                    total_pages: Some(restaurants.meta.total_pages()),
                    total_results: Some(restaurants.meta.total),
                    restaurants: Some(restaurants.items),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(match err {
                        Error::FailedToValidate(errors) => validation::into_message(&errors),
                        Error::FailedToSearchRestaurants => String::from("Unexpected error"),
                    }),
                    total_pages: None,
                    total_results: None,
                    restaurants: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
