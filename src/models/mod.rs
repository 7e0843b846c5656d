mod one_time_code;
mod user;

pub use one_time_code::OneTimeCode;
pub use user::User;
