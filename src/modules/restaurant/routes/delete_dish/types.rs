pub mod request {
    use async_graphql::InputObject;

    #[derive(InputObject)]
    #[graphql(name = "DeleteDishInput")]
    pub struct Body {
        pub dish_id: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use async_graphql::SimpleObject;

    pub enum Success {
        DishDeleted,
    }

    pub enum Error {
        DishNotFound,
        NotRestaurantOwner,
        FailedToDeleteDish,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "DeleteDishOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::DishDeleted) => None,
                Err(Error::DishNotFound) => Some("Dish not found"),
                Err(Error::NotRestaurantOwner) => Some("You are not owner of this restaurant"),
                Err(Error::FailedToDeleteDish) => Some("Unexpected error"),
            };

            Self {
                ok: error.is_none(),
                error: error.map(String::from),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
