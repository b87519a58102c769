//! Outbound email: message types, HTML templates and the SMTP transport.
//!
//! The dispatcher only sees the [`Mailer`] trait, so tests and alternative
//! relays can stand in for [`SmtpMailer`].

mod service;
mod templates;
mod types;

pub use service::{MailError, Mailer, SmtpMailer};
#[cfg(test)]
pub use service::MockMailer;
pub use templates::{ActionEmail, EmailKind};
pub use types::{EmailMessage, SmtpConfig};
