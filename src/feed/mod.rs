pub mod client;
pub mod decoder;
pub mod events;
pub mod models;
pub mod sse;

#[cfg(test)]
pub mod tests;
