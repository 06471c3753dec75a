//! Backend adapter: HTTP gateway and wire protocol types

pub mod gateway;
pub mod protocol;
