pub mod address;
pub mod requests;

// Re-export commonly used types
pub use address::{Address, Coordinate, NewAddress};
pub use requests::{AddressQuery, ErrorResponse, SearchParams};
