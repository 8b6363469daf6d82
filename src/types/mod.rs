//! Value types shared by the raw and resolved settings layers.
//!
//! Each type parses from the textual form a settings file uses and renders
//! back to the form the wiki host expects, so the resolver only has to map
//! parse failures onto the offending key.

mod cache;
mod endpoint;
mod error;
mod locale;
mod mail;
mod uploads;

pub use cache::CacheBackend;
pub use endpoint::Endpoint;
pub(crate) use endpoint::parse_port;
pub use error::ValueError;
pub use locale::{LanguageCode, LocalTimezone};
pub use mail::{MailDelivery, SmtpRelay};
pub use uploads::UploadPolicy;
