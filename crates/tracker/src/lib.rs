pub mod app;
pub mod cli;
pub mod config;
pub mod edit_session;
pub mod export;
pub mod form;
pub mod logging;
pub mod repository;
pub mod view;
