//! Application layer: the notification service.

pub mod service;
