pub mod client_key;
pub mod context;
pub mod environment;
pub mod locale;
pub mod payment_method;
