//! Session capability consumed by the client.
//!
//! Sign-in and sign-out belong to the identity provider integration; the client only needs an
//! identity token and the headers derived from it. Any type holding that state can implement
//! [`Session`].

// self
use crate::{_prelude::*, auth::IdToken};

/// Name of the header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// Authenticated user state produced by an identity provider.
pub trait Session
where
	Self: Send + Sync,
{
	/// Identity token attached to mutating requests.
	fn identity_token(&self) -> &IdToken;

	/// Headers attached to read and delete requests.
	///
	/// Defaults to `Authorization: Bearer <identity token>`.
	fn authorization_headers(&self) -> BTreeMap<String, String> {
		BTreeMap::from([(AUTHORIZATION.to_owned(), self.identity_token().bearer())])
	}
}
impl<S> Session for Arc<S>
where
	S: ?Sized + Session,
{
	fn identity_token(&self) -> &IdToken {
		(**self).identity_token()
	}

	fn authorization_headers(&self) -> BTreeMap<String, String> {
		(**self).authorization_headers()
	}
}

/// Signed-in user as handed over by the hosted identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
	/// Display name of the signed-in user.
	pub username: String,
	/// Identity token issued at sign-in.
	pub id_token: IdToken,
}
impl UserSession {
	/// Creates a session for the provided user and token.
	pub fn new(username: impl Into<String>, id_token: impl Into<String>) -> Self {
		Self { username: username.into(), id_token: IdToken::new(id_token) }
	}
}
impl Session for UserSession {
	fn identity_token(&self) -> &IdToken {
		&self.id_token
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_headers_carry_bearer_token() {
		let session = UserSession::new("alice", "token-1");
		let headers = session.authorization_headers();

		assert_eq!(headers.len(), 1);
		assert_eq!(headers.get(AUTHORIZATION).map(String::as_str), Some("Bearer token-1"));
	}

	#[test]
	fn shared_sessions_delegate() {
		struct ExtraHeaders(IdToken);
		impl Session for ExtraHeaders {
			fn identity_token(&self) -> &IdToken {
				&self.0
			}

			fn authorization_headers(&self) -> BTreeMap<String, String> {
				BTreeMap::from([
					(AUTHORIZATION.to_owned(), self.0.bearer()),
					("X-Trace".to_owned(), "on".to_owned()),
				])
			}
		}

		let shared: Arc<dyn Session> = Arc::new(ExtraHeaders(IdToken::new("t")));

		assert_eq!(shared.identity_token().expose(), "t");
		assert_eq!(shared.authorization_headers().len(), 2);
		assert!(format!("{:?}", UserSession::new("bob", "hidden")).contains("<redacted>"));
	}
}
