pub mod google;
pub mod sessions;
