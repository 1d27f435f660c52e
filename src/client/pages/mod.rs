pub mod demo;
pub mod home;
