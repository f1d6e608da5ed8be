pub mod email_address;
pub mod lead;
mod macros;
