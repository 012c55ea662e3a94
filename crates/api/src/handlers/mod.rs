pub mod admin;
pub mod archive;
