pub mod config;
pub mod contact;
pub mod counter;
pub mod effects;
pub mod scroll;
pub mod typing;
