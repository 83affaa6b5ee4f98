pub mod service;
pub mod validate;
pub mod week;

pub use service::EntryService;
