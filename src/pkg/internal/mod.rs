pub mod access;
pub mod adaptors;
pub mod company;
pub mod email;
pub mod extract;
pub mod scheduling;
pub mod tasks;
