pub mod app;
pub mod profile;
