pub mod contact;
pub mod resume;
