//! Typed OAuth 2.0 error taxonomy: the sixteen registered error codes, a caller-defined escape
//! hatch, RFC 6749 §5.2 wire responses, and a read-only registry for rebuilding typed
//! conditions from responses received over the wire.
//!
//! ```
//! use oauth2_taxonomy::{condition::OAuthError, registry::Registry, response::ErrorResponse};
//!
//! let wire = OAuthError::invalid_grant("refresh token expired").to_response();
//!
//! assert_eq!(wire, ErrorResponse::new("invalid_grant", "refresh token expired"));
//!
//! let rebuilt = Registry::global().reconstruct(&wire).expect("invalid_grant is registered");
//!
//! assert_eq!(rebuilt.to_response(), wire);
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod condition;
pub mod error;
pub mod oauth;
pub mod obs;
pub mod registry;
pub mod response;
pub mod taxonomy;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}
