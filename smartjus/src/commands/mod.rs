pub mod email;
pub mod serve;
pub mod submit;
