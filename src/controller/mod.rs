//! HTTP request handlers.
//!
//! Controllers bind form data, call into the service and repository layers,
//! queue flash messages, and render views. They contain no business logic of
//! their own.

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;

#[cfg(test)]
mod test;
