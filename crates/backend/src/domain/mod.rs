pub mod admins;
pub mod devices;
pub mod logs;
pub mod notifications;
pub mod users;
