//! CLI commands for skillrank

pub mod accuracy;
pub mod courses;
pub mod dispatch;
pub mod feedback;
pub mod init;
pub mod recommend;
