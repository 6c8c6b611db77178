pub mod comment;
pub mod community;
pub mod post;
