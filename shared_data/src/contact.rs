use std::fmt;

use crate::ConfigError;

/// The guest house's phone number in canonical form: an optional leading `+`
/// followed by ASCII digits only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContactTarget(String);

impl ContactTarget {
	/// Separators people tend to type when writing a number out by hand. These are dropped during
	/// parsing; anything else that isn't a digit means the number is wrong.
	const SEPARATORS: &'static [char] = &[' ', '-', '.', '(', ')'];

	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		let raw = raw.trim();
		if raw.is_empty() {
			return Err(ConfigError::MissingContact);
		}

		let (plus, rest) = match raw.strip_prefix('+') {
			Some(rest) => (true, rest),
			None => (false, raw)
		};

		if let Some(bad) = rest.chars().find(|c| !c.is_ascii_digit() && !Self::SEPARATORS.contains(c)) {
			return Err(ConfigError::InvalidContact { raw: raw.to_string(), bad });
		}

		let digits = rest.chars().filter(char::is_ascii_digit).collect::<String>();
		if digits.is_empty() {
			return Err(ConfigError::InvalidContact { raw: raw.to_string(), bad: '+' });
		}

		Ok(Self(if plus { format!("+{digits}") } else { digits }))
	}

	/// The number as stored, leading `+` included
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// wa.me only understands the bare digits
	#[must_use]
	pub fn digits(&self) -> &str {
		self.0.strip_prefix('+').unwrap_or(&self.0)
	}
}

impl fmt::Display for ContactTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
