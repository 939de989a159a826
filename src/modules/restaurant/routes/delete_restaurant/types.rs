pub mod request {
    use async_graphql::InputObject;

    #[derive(InputObject)]
    #[graphql(name = "DeleteRestaurantInput")]
    pub struct Body {
        pub restaurant_id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use async_graphql::SimpleObject;

    pub enum Success {
        RestaurantDeleted,
    }

    pub enum Error {
        RestaurantNotFound,
        NotRestaurantOwner,
        FailedToDeleteRestaurant,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "DeleteRestaurantOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::RestaurantDeleted) => None,
                Err(Error::RestaurantNotFound) => Some("Restaurant not found"),
                Err(Error::NotRestaurantOwner) => Some("You are not owner of this restaurant"),
                Err(Error::FailedToDeleteRestaurant) => Some("Unexpected error"),
            };

            Self {
                ok: error.is_none(),
                error: error.map(String::from),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
