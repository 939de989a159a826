pub mod job;
pub mod repository;
pub mod resolvers;
pub mod routes;
