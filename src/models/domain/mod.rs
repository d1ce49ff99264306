pub mod admin;
pub mod question;
pub mod quiz;

pub use admin::Admin;
pub use question::Question;
pub use quiz::Quiz;
