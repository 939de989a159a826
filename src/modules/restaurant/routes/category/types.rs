pub mod request {
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    #[graphql(name = "CategoryInput")]
    pub struct Body {
        pub slug: String,
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
        modules::restaurant::repository::{Category, Restaurant},
        utils::{pagination::Paginated, validation},
    };
    use async_graphql::SimpleObject;
    use validator::ValidationErrors;

    pub enum Success {
        Category(Category, Paginated<Restaurant>),
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CategoryNotFound,
        FailedToLoadCategory,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "CategoryOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub total_pages: Option<u32>,
        pub total_results: Option<u32>,
        pub category: Option<Category>,
        pub restaurants: Option<Vec<Restaurant>>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Category(category, restaurants)) => Self {
                    ok: true,
                    error: None,
                    total_pages: Some(restaurants.meta.total_pages()),
                    total_results: Some(restaurants.meta.total),
                    category: Some(category),
                    restaurants: Some(restaurants.items),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(match err {
                        Error::FailedToValidate(errors) => validation::into_message(&errors),
                        Error::CategoryNotFound => String::from("Category not found"),
                        Error::FailedToLoadCategory => String::from("Unexpected error"),
                    }),
                    total_pages: None,
                    total_results: None,
                    category: None,
                    restaurants: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
