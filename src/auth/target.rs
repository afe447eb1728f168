//! Base address and per-call target shared by every authenticated operation.

// self
use crate::{_prelude::*, auth::Credential, error::ConfigError};

/// Caller-supplied API base address.
///
/// Validated once so endpoint paths can always be appended; any path already present on
/// the base (for example a reverse-proxy prefix) is preserved.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);
impl BaseUrl {
	/// Parses and validates a base address.
	pub fn parse(value: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
			url: value.to_owned(),
			source: Some(source),
		})?;

		Self::try_from(url)
	}

	/// Returns the validated address.
	pub fn as_url(&self) -> &Url {
		&self.0
	}

	/// Appends an endpoint path such as `/api/login` to the base address.
	pub fn endpoint(&self, path: &str) -> Url {
		let mut url = self.0.clone();

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().extend(path.split('/').filter(|segment| !segment.is_empty()));
		}

		url
	}
}
impl TryFrom<Url> for BaseUrl {
	type Error = ConfigError;

	fn try_from(url: Url) -> Result<Self, Self::Error> {
		if url.cannot_be_a_base() {
			return Err(ConfigError::InvalidBaseUrl { url: url.into(), source: None });
		}

		Ok(Self(url))
	}
}
impl From<BaseUrl> for Url {
	fn from(value: BaseUrl) -> Self {
		value.0
	}
}
impl FromStr for BaseUrl {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl Debug for BaseUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "BaseUrl({})", self.0)
	}
}
impl Display for BaseUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}

/// Base address + credential carried by every authenticated operation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
	/// API base address.
	pub base: BaseUrl,
	/// Credential presented in the auth headers.
	pub credential: Credential,
}
impl Target {
	/// Creates a new target.
	pub fn new(base: BaseUrl, credential: Credential) -> Self {
		Self { base, credential }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn base(value: &str) -> BaseUrl {
		BaseUrl::parse(value).expect("Test base address should parse.")
	}

	#[test]
	fn endpoint_appends_path() {
		assert_eq!(
			base("https://app.buzzy.buzz").endpoint("/api/login").as_str(),
			"https://app.buzzy.buzz/api/login"
		);
		assert_eq!(
			base("https://app.buzzy.buzz/").endpoint("/api/microappdata/row").as_str(),
			"https://app.buzzy.buzz/api/microappdata/row"
		);
	}

	#[test]
	fn endpoint_preserves_base_path() {
		assert_eq!(
			base("https://proxy.example.com/buzzy/").endpoint("/api/insertteam").as_str(),
			"https://proxy.example.com/buzzy/api/insertteam"
		);
	}

	#[test]
	fn rejects_addresses_that_cannot_carry_paths() {
		assert!(matches!(
			BaseUrl::parse("mailto:ops@example.com"),
			Err(ConfigError::InvalidBaseUrl { source: None, .. })
		));
		assert!(matches!(
			BaseUrl::parse("not a url"),
			Err(ConfigError::InvalidBaseUrl { source: Some(_), .. })
		));
	}
}
