pub mod email;
pub mod member_name;
