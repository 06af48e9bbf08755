pub mod chat;
pub mod icon_button;
pub mod login;
pub mod style;
