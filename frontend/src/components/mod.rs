pub mod auth_gate;
pub mod data_browser;
pub mod form;
pub mod landing;
pub mod login;
pub mod notification;
