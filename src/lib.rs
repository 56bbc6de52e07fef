//! Decides whether a client should be sent cookies with `SameSite=None`.
//!
//! Some browsers reject `SameSite=None` cookies or treat them as
//! `SameSite=Strict`. For those clients the attribute has to be left off.
//! [`classify`] applies the list of known incompatible clients to a parsed
//! [`ClientIdentity`]; [`UserAgentParser`] produces that identity from a raw
//! `User-Agent` header, and [`same_site_none`] combines both.
//!
//! Pair [`CookieAttributeDecision::EmitNone`] with the `Secure` attribute.

mod classifier;
mod db;
mod error;
mod literal;
mod parser;
mod parser_data;
mod same_site;
mod substitution;
mod types;
mod user_agent_parser;

pub use classifier::{classify, incompatibility, Condition, IncompatibilityRule, INCOMPATIBLE_CLIENTS};
pub use error::{Error, Result};
pub use same_site::{same_site_none, SameSiteClassifier};
pub use types::*;
pub use user_agent_parser::{ParseUserAgent, UserAgentParser};
