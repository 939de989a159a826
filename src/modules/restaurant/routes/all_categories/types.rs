pub mod response {
    use crate::modules::restaurant::repository::Category;
    use async_graphql::SimpleObject;

    pub enum Success {
        Categories(Vec<Category>),
    }

    pub enum Error {
        FailedToFetchCategories,
    }

    #[derive(SimpleObject)]
    #[graphql(name = "AllCategoriesOutput")]
    pub struct Output {
        pub ok: bool,
        pub error: Option<String>,
        pub categories: Option<Vec<Category>>,
    }

    impl From<Response> for Output {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Categories(categories)) => Self {
                    ok: true,
                    error: None,
                    categories: Some(categories),
                },
                Err(Error::FailedToFetchCategories) => Self {
                    ok: false,
                    error: Some(String::from("Unexpected error")),
                    categories: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
