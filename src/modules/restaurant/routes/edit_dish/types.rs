pub mod request {
    use crate::{
        modules::restaurant::{
            repository::DishOption, routes::create_dish::types::request::validate_price,
        },
        utils::money::Money,
    };
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "EditDishInput")]
    pub struct Body {
        pub dish_id: String,
        #[validate(length(min = 1, message = "Name can't be empty"))]
        pub name: Option<String>,
        #[validate(custom(code = "INVALID_DISH_PRICE", function = "validate_price"))]
        pub price: Option<Money>,
        #[validate(length(
            min = 4,
            max = 144,
            message = "Description must be between 4 and 144 characters long"
        ))]
        pub description: Option<String>,
        pub photo: Option<String>,
        pub options: Option<Vec<DishOption>>,
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
        DishUpdated,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        DishNotFound,
        NotRestaurantOwner,
        FailedToEditDish,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "EditDishOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::DishUpdated) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::DishNotFound) => Some(String::from("Dish not found")),
                Err(Error::NotRestaurantOwner) => {
                    Some(String::from("You are not owner of this restaurant"))
                }
                Err(Error::FailedToEditDish) => Some(String::from("Unexpected error")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
