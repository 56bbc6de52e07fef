mod browser_family;
mod client_identity;
mod decision;
mod os_family;
mod version;

pub use browser_family::*;
pub use client_identity::*;
pub use decision::*;
pub use os_family::*;
pub use version::*;
