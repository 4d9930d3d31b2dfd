pub mod alerts;
pub mod auth;
pub mod health;
pub mod overview;
pub mod websites;
