pub mod build_response;
pub mod comment;
pub mod community;
pub mod context;
pub mod person;
pub mod post;
pub mod utils;
