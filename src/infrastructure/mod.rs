pub mod embed;
pub mod script;
pub mod services;
