pub mod entries;
pub mod export;
pub mod health;
pub mod session;
pub mod themes;
