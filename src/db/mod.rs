pub mod one_time_codes;
pub mod schema;
pub mod users;
