pub mod client;
pub mod errors;
pub mod location;
pub mod public_ip;
pub mod types;
pub mod utils;

pub use client::IpLookup;
pub use errors::LookupError;
pub use types::Config;
