//! Core value objects

pub mod question;
