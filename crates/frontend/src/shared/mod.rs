pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod storage;
