mod services;
mod stores;
mod use_cases;

pub use services::Services;
pub use stores::Stores;
pub use use_cases::UseCases;
