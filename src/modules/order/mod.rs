pub mod events;
pub mod repository;
pub mod resolvers;
pub mod routes;
pub mod service;
