pub mod conflict;
pub mod drive;
pub mod request;
