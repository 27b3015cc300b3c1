pub mod admin;
pub mod blog;
pub mod site;
