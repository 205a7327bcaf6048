pub mod api_utils;
pub mod components;
pub mod crud_client;
pub mod icons;
pub mod modal;
