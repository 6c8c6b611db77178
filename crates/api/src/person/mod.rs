pub mod feed;
pub mod follow;
pub mod profile;
pub mod unfollow;
