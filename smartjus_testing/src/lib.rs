pub mod logs;
pub mod resend;
