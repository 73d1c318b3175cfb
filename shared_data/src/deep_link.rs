use crate::{ContactTarget, EnquiryFields, RoomListing, ValidationError};

pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// What the pre-filled message should be about
#[derive(Debug, Clone, Copy)]
pub enum MessageContext<'a> {
	/// The generic "I'd like a room" message behind every Book Now/WhatsApp button
	General { site_name: &'a str },
	FreeText(&'a str),
	Enquiry(&'a EnquiryFields),
	Room(&'a RoomListing)
}

impl MessageContext<'_> {
	pub fn body(&self) -> Result<String, ValidationError> {
		Ok(match self {
			Self::General { site_name } => format!(
				"Hello, I am interested in booking a room at {site_name}. Please share room availability and details."
			),
			Self::FreeText(text) => (*text).to_string(),
			Self::Enquiry(fields) => {
				fields.validate()?;
				fields.message()
			},
			Self::Room(room) => format!(
				"Hello, I am interested in booking a {}. Please let me know the details.",
				room.name
			)
		})
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepLinks {
	/// `tel:` uri, opened in place
	pub call: String,
	/// wa.me uri, opened in a new browsing context
	pub message: String
}

/// Turns a message context into call/WhatsApp links for one specific contact number. The number is
/// handed in when this is built so that nothing has to reach for a global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepLinkComposer {
	contact: ContactTarget
}

impl DeepLinkComposer {
	#[must_use]
	pub fn new(contact: ContactTarget) -> Self {
		Self { contact }
	}

	#[must_use]
	pub fn contact(&self) -> &ContactTarget {
		&self.contact
	}

	#[must_use]
	pub fn call_uri(&self) -> String {
		format!("tel:{}", self.contact)
	}

	#[must_use]
	pub fn message_uri(&self, body: &str) -> String {
		format!("{WHATSAPP_BASE}{}?text={}", self.contact.digits(), urlencoding::encode(body))
	}

	pub fn compose(&self, context: MessageContext<'_>) -> Result<DeepLinks, ValidationError> {
		let body = context.body()?;

		Ok(DeepLinks {
			call: self.call_uri(),
			message: self.message_uri(&body)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Field;

	fn composer() -> DeepLinkComposer {
		DeepLinkComposer::new(ContactTarget::parse("+919179567877").unwrap())
	}

	fn decoded_text(uri: &str) -> String {
		let (_, text) = uri.split_once("?text=").unwrap();
		urlencoding::decode(text).unwrap().into_owned()
	}

	#[test]
	fn minimal_enquiry_matches_expected_message() {
		let mut fields = EnquiryFields::default();
		fields.set(Field::FullName, "Asha".into());
		fields.set(Field::Phone, "9999999999".into());

		let links = composer().compose(MessageContext::Enquiry(&fields)).unwrap();

		assert!(links.message.starts_with("https://wa.me/919179567877?text="));
		assert_eq!(
			decoded_text(&links.message),
			"Hello,\nMy name is Asha.\nYou can reach me at 9999999999.\n\nCan you please share availability and details? Thank you!"
		);
		assert_eq!(links.call, "tel:+919179567877");
	}

	#[test]
	fn incomplete_enquiry_produces_no_links() {
		let mut fields = EnquiryFields::default();
		fields.set(Field::Phone, "9999999999".into());

		assert_eq!(
			composer().compose(MessageContext::Enquiry(&fields)),
			Err(ValidationError::MissingName)
		);
	}

	#[test]
	fn room_context_names_the_room() {
		let room = &crate::default_rooms()[6];
		let links = composer().compose(MessageContext::Room(room)).unwrap();

		assert_eq!(
			decoded_text(&links.message),
			"Hello, I am interested in booking a GROUP STAY. Please let me know the details."
		);
	}

	#[test]
	fn general_context_names_the_guest_house() {
		let links = composer()
			.compose(MessageContext::General { site_name: "Varahaswamy Guest House" })
			.unwrap();

		assert_eq!(
			decoded_text(&links.message),
			"Hello, I am interested in booking a room at Varahaswamy Guest House. Please share room availability and details."
		);
	}

	#[test]
	fn reserved_and_non_ascii_characters_are_escaped() {
		let text = "Room & board? 100% yes #1 🙏 తిరుపతి";
		let uri = composer().message_uri(text);
		let (_, encoded) = uri.split_once("?text=").unwrap();

		assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.~%".contains(&b)));
		assert!(encoded.contains("%26"));
		assert!(encoded.contains("%3F"));
		assert!(encoded.contains("%23"));
		assert_eq!(decoded_text(&uri), text);
	}

	#[test]
	fn free_text_is_sent_verbatim() {
		let links = composer().compose(MessageContext::FreeText("hi\nthere")).unwrap();
		assert!(links.message.ends_with("?text=hi%0Athere"));
	}
}
