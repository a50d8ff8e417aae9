pub mod credentials;
pub mod oauth;
pub mod sheets;
