pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "EditRestaurantInput")]
    pub struct Body {
        pub restaurant_id: String,
        #[validate(length(min = 5, message = "Name must be at least 5 characters long"))]
        pub name: Option<String>,
        #[validate(length(min = 1, message = "Cover image can't be empty"))]
        pub cover_img: Option<String>,
        #[validate(length(min = 1, message = "Address can't be empty"))]
        pub address: Option<String>,
        #[validate(length(min = 1, message = "Category name can't be empty"))]
        pub category_name: Option<String>,
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
        RestaurantUpdated,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        NotRestaurantOwner,
        FailedToEditRestaurant,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "EditRestaurantOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::RestaurantUpdated) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::RestaurantNotFound) => Some(String::from("Restaurant not found")),
                Err(Error::NotRestaurantOwner) => {
                    Some(String::from("You are not owner of this restaurant"))
                }
                Err(Error::FailedToEditRestaurant) => Some(String::from("Unexpected error")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
