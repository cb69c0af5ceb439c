//! Configuration types for the MolPay payment method.
//!
//! A [`MolpayConfiguration`] carries the shopper locale, the backend
//! [`Environment`] and the merchant's [`ClientKey`]. It is created through
//! [`MolpayConfigurationBuilder`] and can be moved across a process boundary
//! with the [`Parcelable`] codec.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod objects;
pub mod parcel;

pub use config::{
    Configuration, ConfigurationBuilder, ConfigurationError, IssuerListBuilder,
    IssuerListConfiguration, MolpayConfiguration, MolpayConfigurationBuilder,
    PaymentMethodConfigurations,
};
pub use objects::client_key::{ClientKey, ClientKeyError};
pub use objects::context::{FixedContext, HostContext, SystemContext};
pub use objects::environment::Environment;
pub use objects::locale::{Locale, LocaleError};
pub use objects::payment_method::MolpayVariant;
pub use parcel::{ParcelError, ParcelReader, ParcelWriter, Parcelable};
