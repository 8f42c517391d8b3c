pub mod entities;
pub mod errors;
pub mod helpers;
pub mod notifier;
pub mod stores;
