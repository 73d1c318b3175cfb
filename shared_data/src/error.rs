use thiserror::Error;

/// Why an enquiry couldn't be turned into a message. All of these are recoverable by the guest
/// fixing the form (or by us fixing the site config).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("please fill in your name")]
	MissingName,
	#[error("please fill in your phone number")]
	MissingPhone,
	#[error("the guest house contact number is not configured")]
	MissingContact
}

impl ValidationError {
	/// What we actually show next to the form
	#[must_use]
	pub fn notice(self) -> &'static str {
		match self {
			Self::MissingName | Self::MissingPhone =>
				"Please fill your Name and Phone so we can get back to you.",
			Self::MissingContact =>
				"Enquiries are unavailable right now, please call us instead."
		}
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("no contact number was configured")]
	MissingContact,
	#[error("contact number '{raw}' contains '{bad}', which is not a digit or separator")]
	InvalidContact { raw: String, bad: char },
	#[error("at least one hero image is required")]
	NoHeroImages,
	#[error("slide interval must be greater than 0ms")]
	ZeroInterval,
	#[error("couldn't parse site config: {0}")]
	Parse(String)
}
