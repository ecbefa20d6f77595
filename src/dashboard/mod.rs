pub mod canvas;
pub mod handlers;
pub mod message_types;
pub mod responses;
pub mod status;
