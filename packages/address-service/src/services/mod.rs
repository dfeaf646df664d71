pub mod address;
pub mod location;
pub mod store;
