use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
	#[serde(rename = "booking-policy")]
	Booking,
	#[serde(rename = "privacy-policy")]
	Privacy,
	#[serde(rename = "terms-and-conditions")]
	Terms,
	#[serde(rename = "cancellation-policy")]
	Cancellation
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
	Paragraph(&'static str),
	Heading(&'static str),
	List(&'static [&'static str])
}

impl Policy {
	pub const ALL: [Self; 4] = [Self::Booking, Self::Privacy, Self::Terms, Self::Cancellation];

	#[must_use]
	pub fn slug(self) -> &'static str {
		match self {
			Self::Booking => "booking-policy",
			Self::Privacy => "privacy-policy",
			Self::Terms => "terms-and-conditions",
			Self::Cancellation => "cancellation-policy"
		}
	}

	#[must_use]
	pub fn path(self) -> String {
		format!("/{}", self.slug())
	}

	#[must_use]
	pub fn from_slug(slug: &str) -> Option<Self> {
		let slug = slug.trim_matches('/');
		Self::ALL.into_iter().find(|p| p.slug() == slug)
	}

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Self::Booking => "Booking Policy",
			Self::Privacy => "Privacy Policy",
			Self::Terms => "Terms & Conditions",
			Self::Cancellation => "Cancellation Policy"
		}
	}

	#[must_use]
	pub fn blocks(self) -> &'static [Block] {
		use Block::{Heading, List, Paragraph};

		match self {
			Self::Booking => &[
				Paragraph("Varahaswamy Guest House provides comfortable and reliable accommodation for pilgrims and families visiting Tirupati."),
				Heading("Reservation Confirmation"),
				Paragraph("Bookings are confirmed only after confirmation via phone, WhatsApp, or authorized booking channels."),
				Heading("Check-in and Check-out"),
				List(&["Check-in: 12:00 PM", "Check-out: 11:00 AM", "Early check-in subject to availability"]),
				Heading("Identification"),
				Paragraph("Guests must provide valid government-issued ID proof at check-in."),
				Heading("Payment"),
				Paragraph("Payment may be required at booking or check-in depending on availability."),
			],
			Self::Privacy => &[
				Paragraph("Varahaswamy Guest House respects and protects your privacy."),
				Heading("Information Collected"),
				List(&["Name", "Phone number", "Booking information"]),
				Heading("Usage"),
				List(&["Booking confirmation", "Guest support", "Improving services"]),
				Heading("Security"),
				Paragraph("We do not sell or share guest information with third parties."),
			],
			Self::Terms => &[
				Paragraph("By booking or staying at Varahaswamy Guest House, guests agree to the following:"),
				List(&[
					"Valid ID proof required",
					"No illegal activities allowed",
					"Guests responsible for damages",
					"Management reserves right to refuse service",
					"Guests must follow property rules"
				]),
			],
			Self::Cancellation => &[
				Paragraph("Guests may cancel bookings by contacting us via phone or WhatsApp."),
				List(&[
					"Cancel at least 24 hours before check-in",
					"Late cancellations may not be refundable",
					"Refund timing depends on payment method"
				]),
			]
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_match_serde_names() {
		for policy in Policy::ALL {
			let json = serde_json::to_string(&policy).unwrap();
			assert_eq!(json, format!("\"{}\"", policy.slug()));
			assert_eq!(Policy::from_slug(&policy.path()), Some(policy));
		}
	}

	#[test]
	fn unknown_slug_is_none() {
		assert_eq!(Policy::from_slug("/disclaimer"), None);
	}
}
