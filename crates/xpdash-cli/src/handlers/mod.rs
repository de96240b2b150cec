pub mod audit;
pub mod config;
pub mod overview;
pub mod progress;
pub mod skills;
pub mod timeline;
pub mod user;
pub mod xp;
