use serde::{Deserialize, Serialize};

use crate::{default_rooms, ConfigError, ContactTarget, DeepLinkComposer, MessageContext, Policy, RoomListing};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
	pub label: String,
	pub url: String
}

/// Everything that differs between deployments of the site. Any key left out of the json falls
/// back to what the main Tirupati site uses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
	pub name: String,
	pub tagline: String,
	pub address: String,
	pub email: String,
	/// Parsed into a [`ContactTarget`]. Leaving it empty disables every call/WhatsApp button and
	/// makes the enquiry form refuse to submit.
	pub contact: String,
	/// How the number is written out on buttons
	pub contact_display: String,
	pub hero_images: Vec<String>,
	pub slide_interval_ms: u32,
	pub gallery: Vec<String>,
	pub rooms: Vec<RoomListing>,
	/// Which policy pages get a route and a footer link
	pub policies: Vec<Policy>,
	pub map_embed_url: String,
	pub social: Vec<SocialLink>,
	/// Shown in the footer credit; `null` drops the year entirely
	pub copyright_year: Option<u16>
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			name: "Varahaswamy Guest House".into(),
			tagline: "SAFE AND HYGIENIC ROOMS IN TIRUPATI".into(),
			address: "Tirumala, Tirupati Urban, Andhra Pradesh 517504".into(),
			email: "support@varaswami.site".into(),
			contact: "+919179567877".into(),
			contact_display: "+91 9179567877".into(),
			hero_images: (0..9).map(|i| format!("/Banner/{i}.webp")).collect(),
			slide_interval_ms: 2000,
			gallery: (4..8).map(|i| format!("/Banner/{i}.webp")).collect(),
			rooms: default_rooms(),
			policies: Policy::ALL.to_vec(),
			map_embed_url: "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d7753.044016237839!2d79.347729!3d13.686804!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bb2ca9d201aaaab%3A0xfeb439bc17eb84bc!2sVarahaswamy%20Guest%20house!5e0!3m2!1sen!2sin!4v1769427085454!5m2!1sen!2sin".into(),
			social: [
				("Facebook", "https://facebook.com"),
				("Twitter", "https://twitter.com"),
				("Tumblr", "https://tumblr.com"),
				("TikTok", "https://tiktok.com"),
			].into_iter()
				.map(|(label, url)| SocialLink { label: label.into(), url: url.into() })
				.collect(),
			copyright_year: Some(2026)
		}
	}
}

impl SiteConfig {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config = serde_json::from_str::<Self>(json)
			.map_err(|e| ConfigError::Parse(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.contact.trim().is_empty() {
			ContactTarget::parse(&self.contact)?;
		}
		if self.hero_images.is_empty() {
			return Err(ConfigError::NoHeroImages);
		}
		if self.slide_interval_ms == 0 {
			return Err(ConfigError::ZeroInterval);
		}
		Ok(())
	}

	/// `None` when no contact is configured
	#[must_use]
	pub fn composer(&self) -> Option<DeepLinkComposer> {
		ContactTarget::parse(&self.contact)
			.ok()
			.map(DeepLinkComposer::new)
	}

	#[must_use]
	pub fn general_enquiry(&self) -> MessageContext<'_> {
		MessageContext::General { site_name: &self.name }
	}

	#[must_use]
	pub fn policy_enabled(&self, policy: Policy) -> bool {
		self.policies.contains(&policy)
	}

	/// The line at the very bottom of every page
	#[must_use]
	pub fn credit(&self) -> String {
		match self.copyright_year {
			Some(year) => format!("© {year} Created with {}", self.name),
			None => format!("Created with {}", self.name)
		}
	}

	/// Every path the site actually serves a page for, landing page first
	#[must_use]
	pub fn routes(&self) -> Vec<String> {
		std::iter::once("/".to_string())
			.chain(Policy::ALL.into_iter()
				.filter(|p| self.policy_enabled(*p))
				.map(Policy::path)
			)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		let config = SiteConfig::default();
		config.validate().unwrap();
		assert_eq!(config.hero_images.len(), 9);
		assert_eq!(config.composer().unwrap().contact().as_str(), "+919179567877");
	}

	#[test]
	fn missing_keys_fall_back_to_defaults() {
		let config = SiteConfig::from_json(r#"{
			"contact": "+91 98765 43210",
			"policies": ["privacy-policy"]
		}"#).unwrap();

		assert_eq!(config.name, "Varahaswamy Guest House");
		assert_eq!(config.rooms, default_rooms());
		assert_eq!(config.composer().unwrap().contact().digits(), "919876543210");
		assert_eq!(config.routes(), ["/", "/privacy-policy"]);
	}

	#[test]
	fn empty_contact_is_allowed_but_disables_composer() {
		let config = SiteConfig::from_json(r#"{ "contact": "" }"#).unwrap();
		assert_eq!(config.composer(), None);
	}

	#[test]
	fn credit_year_comes_from_config() {
		assert_eq!(SiteConfig::default().credit(), "© 2026 Created with Varahaswamy Guest House");

		let config = SiteConfig::from_json(r#"{ "name": "Sri Lodge", "copyright_year": 2031 }"#).unwrap();
		assert_eq!(config.credit(), "© 2031 Created with Sri Lodge");

		let config = SiteConfig::from_json(r#"{ "copyright_year": null }"#).unwrap();
		assert_eq!(config.credit(), "Created with Varahaswamy Guest House");
	}

	#[test]
	fn bad_values_are_rejected() {
		assert!(matches!(
			SiteConfig::from_json(r#"{ "contact": "call us" }"#),
			Err(ConfigError::InvalidContact { .. })
		));
		assert_eq!(SiteConfig::from_json(r#"{ "hero_images": [] }"#), Err(ConfigError::NoHeroImages));
		assert_eq!(SiteConfig::from_json(r#"{ "slide_interval_ms": 0 }"#), Err(ConfigError::ZeroInterval));
		assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
		assert!(matches!(
			SiteConfig::from_json(r#"{ "policies": ["disclaimer"] }"#),
			Err(ConfigError::Parse(_))
		));
	}
}
