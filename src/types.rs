pub use crate::utils::database;
use crate::{modules::order::events::OrderEvent, utils::pubsub::PubSub};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const ORDER_EVENTS_CAPACITY: usize = 256;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct JwtContext {
    pub private_key: String,
    pub expiration_hours: i64,
}

#[derive(Clone)]
pub struct MailContext {
    pub api_endpoint: String,
    pub api_key: String,
    pub domain: String,
    pub from_email: String,
}

#[derive(Clone)]
pub struct PaymentContext {
    pub promotion_days: i64,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub jwt: JwtContext,
    pub mail: MailContext,
    pub payment: PaymentContext,
    pub order_events: PubSub<OrderEvent>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub private_key: String,
    pub expiration_hours: i64,
}

#[derive(Clone)]
pub struct MailConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub domain: String,
    pub from_email: String,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub promotion_days: i64,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub jwt: JwtConfig,
    pub mail: MailConfig,
    pub payment: PaymentConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").expect("APP_ENV not set");
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let jwt_private_key = env::var("JWT_PRIVATE_KEY").expect("JWT_PRIVATE_KEY not set");
        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "168".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRATION_HOURS");
        let mail_api_endpoint = env::var("MAILGUN_API_ENDPOINT")
            .unwrap_or_else(|_| "https://api.mailgun.net".to_string());
        let mail_api_key = env::var("MAILGUN_API_KEY").expect("MAILGUN_API_KEY not set");
        let mail_domain = env::var("MAILGUN_DOMAIN").expect("MAILGUN_DOMAIN not set");
        let mail_from_email =
            env::var("MAILGUN_FROM_EMAIL").expect("MAILGUN_FROM_EMAIL not set");
        let promotion_days = env::var("PROMOTION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse::<i64>()
            .expect("Invalid PROMOTION_DAYS");

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            jwt: JwtConfig {
                private_key: jwt_private_key,
                expiration_hours: jwt_expiration_hours,
            },
            mail: MailConfig {
                api_endpoint: mail_api_endpoint,
                api_key: mail_api_key,
                domain: mail_domain,
                from_email: mail_from_email,
            },
            payment: PaymentConfig { promotion_days },
        }
    }
}

/// The tick handed to cron workers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Job(DateTime<Utc>);

impl apalis::prelude::Job for Job {
    const NAME: &'static str = "nuber_eats::Job";
}

impl From<DateTime<Utc>> for Job {
    fn from(t: DateTime<Utc>) -> Self {
        Self(t)
    }
}

#[derive(Clone)]
pub struct SchedulableJob {
    pub name: &'static str,
    pub schedule: apalis::cron::Schedule,
    pub job: Arc<
        dyn Fn() -> Pin<Box<dyn Future<Output = Result<(), apalis::prelude::Error>> + Send>>
            + Send
            + Sync,
    >,
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            jwt: JwtContext {
                private_key: self.jwt.private_key,
                expiration_hours: self.jwt.expiration_hours,
            },
            mail: MailContext {
                api_endpoint: self.mail.api_endpoint,
                api_key: self.mail.api_key,
                domain: self.mail.domain,
                from_email: self.mail.from_email,
            },
            payment: PaymentContext {
                promotion_days: self.payment.promotion_days,
            },
            order_events: PubSub::new(ORDER_EVENTS_CAPACITY),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// A context whose pool never connects unless a query actually runs.
    pub fn context() -> Arc<Context> {
        Arc::new(Context {
            app: AppContext {
                host: String::from("127.0.0.1"),
                environment: AppEnvironment::Development,
                port: 8000,
                url: String::from("http://127.0.0.1:8000"),
            },
            db_conn: database::connect_lazy("postgres://postgres@127.0.0.1:5432/nuber_eats_test")
                .expect("Invalid test database url"),
            jwt: JwtContext {
                private_key: String::from("test-private-key"),
                expiration_hours: 1,
            },
            mail: MailContext {
                api_endpoint: String::from("http://127.0.0.1:9"),
                api_key: String::from("API_KEY"),
                domain: String::from("mock.domain.com"),
                from_email: String::from("mock@mail.com"),
            },
            payment: PaymentContext { promotion_days: 7 },
            order_events: PubSub::new(ORDER_EVENTS_CAPACITY),
        })
    }
}
