//! Client configuration resolved once at startup and injected into [`FragmentsClient`].
//!
//! The only recognized option is the service base URL (`baseUrl` in serialized form). Request
//! code never consults the process environment; callers resolve the configuration with
//! [`ClientConfig::from_env`] (or [`ClientConfig::from_lookup`]) and hand it to the client.
//!
//! [`FragmentsClient`]: crate::client::FragmentsClient

// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "API_URL";
/// Base URL used when [`API_URL_ENV`] is absent.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const API_PREFIX: [&str; 2] = ["v1", "fragments"];

/// Validated client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClientConfig", into = "RawClientConfig")]
pub struct ClientConfig {
	base_url: Url,
}
impl ClientConfig {
	/// Parses and validates the provided base URL.
	pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
		let raw = base_url.as_ref().trim();
		let url = Url::parse(raw)
			.map_err(|source| ConfigError::InvalidBaseUrl { value: raw.to_owned(), source })?;

		Self::from_url(url)
	}

	/// Validates an already parsed base URL.
	pub fn from_url(url: Url) -> Result<Self, ConfigError> {
		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { scheme: url.scheme().to_owned() });
		}
		if url.query().is_some() {
			return Err(ConfigError::UnexpectedUrlPart { part: "query" });
		}
		if url.fragment().is_some() {
			return Err(ConfigError::UnexpectedUrlPart { part: "fragment" });
		}

		Ok(Self { base_url: url })
	}

	/// Resolves the configuration from [`API_URL_ENV`], falling back to [`DEFAULT_BASE_URL`].
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Resolves the configuration through an arbitrary key lookup.
	///
	/// Blank values are treated as absent.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: FnOnce(&str) -> Option<String>,
	{
		match lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
			Some(value) => Self::new(value),
			None => Self::new(DEFAULT_BASE_URL),
		}
	}

	/// Returns the configured base URL.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Builds `<base>/v1/fragments[/segment...]`, optionally with a query string.
	///
	/// Segments are percent-encoded; an empty segment produces a trailing slash.
	pub fn endpoint(&self, segments: &[&str], query: Option<(&str, &str)>) -> Url {
		let mut url = self.base_url.clone();

		// `Url` guarantees path segments for http(s), so this branch always runs.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(API_PREFIX).extend(segments);
		}
		if let Some((key, value)) = query {
			url.query_pairs_mut().append_pair(key, value);
		}

		url
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL)
				.unwrap_or_else(|_| unreachable!("default base URL is a valid literal")),
		}
	}
}
impl FromStr for ClientConfig {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClientConfig {
	base_url: Url,
}
impl TryFrom<RawClientConfig> for ClientConfig {
	type Error = ConfigError;

	fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
		Self::from_url(raw.base_url)
	}
}
impl From<ClientConfig> for RawClientConfig {
	fn from(config: ClientConfig) -> Self {
		Self { base_url: config.base_url }
	}
}
