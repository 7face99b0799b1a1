//! Writes: create, update, and delete.
//!
//! Create and update send `Authorization: Bearer <identity token>` built directly from the
//! session's token, plus the caller-declared `Content-Type`. Delete sends the session's own
//! authorization headers, like the read operations.

// self
use crate::{
	_prelude::*,
	auth::{AUTHORIZATION, FragmentId, Session},
	client::FragmentsClient,
	fragment::{ContentCategory, FragmentPayload},
	http::{FragmentRequest, FragmentResponse, FragmentTransport, Method},
	obs::OperationKind,
};

/// Name of the header carrying the declared payload type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Acknowledgement returned by create and update calls.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationReceipt {
	/// HTTP status returned by the service.
	pub status: u16,
	/// `Location` header, set by the service after a create.
	pub location: Option<Url>,
	/// JSON body describing the stored fragment, when the service sent one.
	pub metadata: Option<Value>,
}
impl MutationReceipt {
	fn from_response(response: FragmentResponse) -> Self {
		let location = response.location().and_then(|value| Url::parse(value).ok());
		// The body is informational; an unparsable one does not fail the write.
		let metadata = response
			.content_type()
			.filter(|value| ContentCategory::classify(value) == ContentCategory::Json)
			.and_then(|_| serde_json::from_slice(&response.body).ok());

		Self { status: response.status, location, metadata }
	}

	/// Fragment reference named by the `Location` header's last path segment.
	pub fn fragment_id(&self) -> Option<FragmentId> {
		self.location
			.as_ref()?
			.path_segments()?
			.next_back()
			.and_then(|segment| FragmentId::new(segment).ok())
	}
}

impl<T> FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	/// Stores a new fragment via `POST /v1/fragments`.
	pub async fn create_fragment<S>(
		&self,
		session: &S,
		payload: FragmentPayload,
	) -> Result<MutationReceipt>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[], None);

		self.call(
			OperationKind::CreateFragment,
			Method::Post,
			url,
			|request| Self::write_request(session, request, payload),
			|response| Ok(MutationReceipt::from_response(response)),
		)
		.await
	}

	/// Replaces a fragment's data via `PUT /v1/fragments/{id}`.
	pub async fn update_fragment<S>(
		&self,
		session: &S,
		id: &FragmentId,
		payload: FragmentPayload,
	) -> Result<MutationReceipt>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[id.as_ref()], None);

		self.call(
			OperationKind::UpdateFragment,
			Method::Put,
			url,
			|request| Self::write_request(session, request, payload),
			|response| Ok(MutationReceipt::from_response(response)),
		)
		.await
	}

	/// Deletes a fragment via `DELETE /v1/fragments/{id}`.
	///
	/// Deleting an already deleted fragment fails like any other non-2xx response.
	pub async fn delete_fragment<S>(&self, session: &S, id: &FragmentId) -> Result<()>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[id.as_ref()], None);

		self.call(
			OperationKind::DeleteFragment,
			Method::Delete,
			url,
			|request| Ok(Self::read_request(session, request)),
			|_| Ok(()),
		)
		.await
	}

	fn write_request<S>(
		session: &S,
		request: FragmentRequest,
		payload: FragmentPayload,
	) -> Result<FragmentRequest>
	where
		S: ?Sized + Session,
	{
		let content_type = payload.content_type.clone();
		let body = payload.into_bytes()?;

		Ok(request
			.with_headers([
				(AUTHORIZATION.to_owned(), session.identity_token().bearer()),
				(CONTENT_TYPE.to_owned(), content_type),
			])
			.with_body(body))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(headers: &[(&str, &str)], body: &str) -> FragmentResponse {
		FragmentResponse {
			status: 201,
			status_text: "Created".into(),
			headers: headers.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
			body: body.as_bytes().to_vec(),
		}
	}

	#[test]
	fn receipt_reads_location_and_metadata() {
		let receipt = MutationReceipt::from_response(response(
			&[
				("location", "http://localhost:8080/v1/fragments/id1"),
				("content-type", "application/json; charset=utf-8"),
			],
			"{\"status\":\"ok\",\"fragment\":{\"id\":\"id1\"}}",
		));

		assert_eq!(receipt.status, 201);
		assert_eq!(receipt.fragment_id().map(String::from).as_deref(), Some("id1"));
		assert_eq!(
			receipt.metadata.as_ref().and_then(|body| body.pointer("/fragment/id")),
			Some(&Value::from("id1"))
		);
	}

	#[test]
	fn receipt_tolerates_missing_or_malformed_parts() {
		let receipt = MutationReceipt::from_response(response(
			&[("content-type", "application/json")],
			"not json",
		));

		assert_eq!(receipt.location, None);
		assert_eq!(receipt.metadata, None);
		assert_eq!(receipt.fragment_id(), None);
	}
}
