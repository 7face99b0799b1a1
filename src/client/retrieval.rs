//! Single-fragment reads: data (dispatched on content type) and metadata.

// self
use crate::{
	_prelude::*,
	auth::{FragmentId, Session},
	client::FragmentsClient,
	fragment::{ContentCategory, FragmentContent, payload},
	http::{FragmentTransport, Method},
	obs::{self, OperationKind},
	view::OutputSink,
};

impl<T> FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	/// Reads fragment data via `GET /v1/fragments/{id}`.
	///
	/// The body is decoded according to the response's `Content-Type`: text, image bytes, or
	/// JSON. Any other type yields [`Error::UnrecognizedContentType`], which is logged at debug
	/// level only.
	pub async fn read_fragment<S>(&self, session: &S, id: &FragmentId) -> Result<FragmentContent>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[id.as_ref()], None);

		self.call(
			OperationKind::ReadFragment,
			Method::Get,
			url,
			|request| Ok(Self::read_request(session, request)),
			|response| {
				let content_type = response.content_type().unwrap_or_default().to_owned();

				FragmentContent::decode(response)?
					.ok_or(Error::UnrecognizedContentType { content_type })
			},
		)
		.await
	}

	/// Reads fragment data and renders it into `sink`.
	///
	/// Both outputs are cleared before the request is issued. Text and JSON then go to the text
	/// output (JSON as its serialized form) and images go to the image output. Nothing is
	/// written when the read fails or the content type is not recognized.
	pub async fn show_fragment<S, O>(
		&self,
		session: &S,
		id: &FragmentId,
		sink: &O,
	) -> Result<ContentCategory>
	where
		S: ?Sized + Session,
		O: ?Sized + OutputSink,
	{
		sink.clear();

		let content = self.read_fragment(session, id).await?;
		let category = content.category();

		match content {
			FragmentContent::Text(text) => sink.write_text(text),
			FragmentContent::Json(value) => sink.write_text(value.to_string()),
			FragmentContent::Image(blob) => sink.show_image(blob),
		}

		Ok(category)
	}

	/// Reads fragment metadata via `GET /v1/fragments/{id}/info`.
	///
	/// The parsed body is logged at info level as well as returned.
	pub async fn fragment_info<S>(&self, session: &S, id: &FragmentId) -> Result<Value>
	where
		S: ?Sized + Session,
	{
		let url = self.config.endpoint(&[id.as_ref(), "info"], None);

		self.call(
			OperationKind::FragmentInfo,
			Method::Get,
			url,
			|request| Ok(Self::read_request(session, request)),
			|response| {
				let body = payload::decode_json(&response.body)?;

				obs::log_body(OperationKind::FragmentInfo, &body);

				Ok(body)
			},
		)
		.await
	}
}
