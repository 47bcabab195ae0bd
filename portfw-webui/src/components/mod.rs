pub mod navbar;
pub mod notice;
pub mod route_form;
