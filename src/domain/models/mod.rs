pub mod auth;
pub mod festival;
pub mod show;
