pub mod blocked_dates;
pub mod companies;
pub mod contacts;
pub mod coordinators;
pub mod date_requests;
pub mod drives;
pub mod emails;
pub mod tasks;
