pub mod request {
    use crate::{modules::restaurant::repository::DishOption, utils::money::Money};
    use async_graphql::InputObject;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    pub fn validate_price(price: &Money) -> Result<(), ValidationError> {
        match price.is_negative() {
            false => Ok(()),
            true => Err(ValidationError::new("INVALID_DISH_PRICE")
                .with_message(Cow::from("Price can't be negative"))),
        }
    }

    #[derive(InputObject, Validate)]
    #[graphql(name = "CreateDishInput")]
    pub struct Body {
        pub restaurant_id: String,
        #[validate(length(min = 1, message = "Name is required"))]
        pub name: String,
        #[validate(custom(code = "INVALID_DISH_PRICE", function = "validate_price"))]
        pub price: Money,
        #[validate(length(
            min = 4,
            max = 144,
            message = "Description must be between 4 and 144 characters long"
        ))]
        pub description: String,
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
        DishCreated,
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        NotRestaurantOwner,
        FailedToCreateDish,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "CreateDishOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            let error = match response {
                Ok(Success::DishCreated) => None,
                Err(Error::FailedToValidate(errors)) => Some(validation::into_message(&errors)),
                Err(Error::RestaurantNotFound) => Some(String::from("Restaurant not found")),
                Err(Error::NotRestaurantOwner) => {
                    Some(String::from("You are not owner of this restaurant"))
                }
                Err(Error::FailedToCreateDish) => Some(String::from("Unexpected error")),
            };

            Self {
                ok: error.is_none(),
                error,
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
