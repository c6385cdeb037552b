pub mod custom_role;
pub mod rating;
pub mod session;
pub mod staff;
pub mod tier;
pub mod work_log;
