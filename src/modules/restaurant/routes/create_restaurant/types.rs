pub mod request {
    use async_graphql::InputObject;
    use regex::Regex;
    use std::{borrow::Cow, sync::LazyLock};
    use validator::{Validate, ValidationError};

    static NOT_BLANK: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\S").expect("Invalid category name regex"));

    fn validate_category_name(name: &str) -> Result<(), ValidationError> {
        match NOT_BLANK.is_match(name) {
            true => Ok(()),
            false => Err(ValidationError::new("INVALID_CATEGORY_NAME")
                .with_message(Cow::from("Category name can't be blank"))),
        }
    }

    #[derive(InputObject, Validate)]
    #[graphql(name = "CreateRestaurantInput")]
    pub struct Body {
        #[validate(length(min = 5, message = "Name must be at least 5 characters long"))]
        pub name: String,
        #[validate(length(min = 1, message = "Cover image is required"))]
        pub cover_img: String,
        #[validate(length(min = 1, message = "Address is required"))]
        pub address: String,
        #[validate(custom(code = "INVALID_CATEGORY_NAME", function = "validate_category_name"))]
        pub category_name: String,
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
        RestaurantCreated(String),
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateRestaurant,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "CreateRestaurantOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurant_id: Option<String>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::RestaurantCreated(restaurant_id)) => Self {
                    ok: true,
                    error: None,
                    restaurant_id: Some(restaurant_id),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(match err {
                        Error::FailedToValidate(errors) => validation::into_message(&errors),
                        Error::FailedToCreateRestaurant => String::from("Unexpected error"),
                    }),
                    restaurant_id: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::Body;
    use validator::Validate;

    fn body(category_name: &str) -> Body {
        Body {
            name: String::from("Burger Palace"),
            cover_img: String::from("https://images.test/burger.png"),
            address: String::from("123 Altar St"),
            category_name: String::from(category_name),
        }
    }

    #[test]
    fn blank_category_names_are_rejected() {
        assert!(body("Fast Food").validate().is_ok());
        assert!(body("   ").validate().is_err());
        assert!(body("").validate().is_err());
    }
}
