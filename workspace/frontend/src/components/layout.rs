mod header;
pub mod layout;

pub use header::Header;
