//! Collection reads: the caller's fragment references, optionally with metadata.

// self
use crate::{
	_prelude::*,
	auth::Session,
	client::FragmentsClient,
	fragment::payload,
	http::{FragmentTransport, Method},
	obs::{self, OperationKind},
};

impl<T> FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	/// Lists the caller's fragments via `GET /v1/fragments`, returning the parsed JSON body.
	///
	/// ```no_run
	/// # async fn demo() -> fragments_client::error::Result<()> {
	/// use fragments_client::{auth::UserSession, client::FragmentsClient, config::ClientConfig};
	///
	/// let client = FragmentsClient::new(ClientConfig::from_env()?)?;
	/// let session = UserSession::new("user1@email.com", "id-token");
	/// let listing = client.list_fragments(&session).await?;
	///
	/// println!("{listing}");
	/// # Ok(())
	/// # }
	/// ```
	pub async fn list_fragments<S>(&self, session: &S) -> Result<Value>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[], None);

		self.call(
			OperationKind::ListFragments,
			Method::Get,
			url,
			|request| Ok(Self::read_request(session, request)),
			|response| Ok(payload::decode_json(&response.body)?),
		)
		.await
	}

	/// Lists the caller's fragments with metadata via `GET /v1/fragments/?expand=1`.
	///
	/// The parsed body is logged at info level as well as returned.
	pub async fn list_fragments_expanded<S>(&self, session: &S) -> Result<Value>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[""], Some(("expand", "1")));

		self.call(
			OperationKind::ListFragmentsExpanded,
			Method::Get,
			url,
			|request| Ok(Self::read_request(session, request)),
			|response| {
				let body = payload::decode_json(&response.body)?;

				obs::log_body(OperationKind::ListFragmentsExpanded, &body);

				Ok(body)
			},
		)
		.await
	}
}
