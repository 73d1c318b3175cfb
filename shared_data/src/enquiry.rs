use serde::{Deserialize, Serialize};

use crate::{DeepLinkComposer, DeepLinks, MessageContext, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
	FullName,
	Phone,
	Checkin,
	Guests,
	Requirements
}

impl Field {
	/// In the order they show up in the message
	pub const ALL: [Self; 5] = [Self::FullName, Self::Phone, Self::Checkin, Self::Guests, Self::Requirements];

	/// The name used for the html input (and the json key)
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::Phone => "phone",
			Self::Checkin => "checkin",
			Self::Guests => "guests",
			Self::Requirements => "requirements"
		}
	}

	#[must_use]
	pub fn placeholder(self) -> &'static str {
		match self {
			Self::FullName => "Full Name",
			Self::Phone => "Phone",
			Self::Checkin => "Check-in",
			Self::Guests => "Guests",
			Self::Requirements => "Additional requirements"
		}
	}

	#[must_use]
	pub fn required(self) -> bool {
		matches!(self, Self::FullName | Self::Phone)
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryFields {
	pub full_name: String,
	pub phone: String,
	pub checkin: String,
	pub guests: String,
	pub requirements: String
}

impl EnquiryFields {
	#[must_use]
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::FullName => &self.full_name,
			Field::Phone => &self.phone,
			Field::Checkin => &self.checkin,
			Field::Guests => &self.guests,
			Field::Requirements => &self.requirements
		}
	}

	/// Replaces just the one field, leaving the rest alone
	pub fn set(&mut self, field: Field, value: String) {
		let slot = match field {
			Field::FullName => &mut self.full_name,
			Field::Phone => &mut self.phone,
			Field::Checkin => &mut self.checkin,
			Field::Guests => &mut self.guests,
			Field::Requirements => &mut self.requirements
		};
		*slot = value;
	}

	/// The trimmed value, if there's anything left after trimming
	#[must_use]
	pub fn populated(&self, field: Field) -> Option<&str> {
		Some(self.get(field).trim()).filter(|v| !v.is_empty())
	}

	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.populated(Field::FullName).is_none() {
			return Err(ValidationError::MissingName);
		}
		if self.populated(Field::Phone).is_none() {
			return Err(ValidationError::MissingPhone);
		}
		Ok(())
	}

	/// Reads like a guest wrote it themselves. Doesn't check for the required fields, use
	/// [`Self::validate`] (or go through the composer) for that.
	#[must_use]
	pub fn message(&self) -> String {
		let mut message = String::from("Hello,\n");

		for field in Field::ALL {
			let Some(value) = self.populated(field) else {
				continue;
			};

			let line = match field {
				Field::FullName => format!("My name is {value}.\n"),
				Field::Phone => format!("You can reach me at {value}.\n"),
				Field::Checkin => format!("I am looking to book a room for check-in on {value}.\n"),
				Field::Guests => {
					let plural = if value == "1" { "" } else { "s" };
					format!("We will be {value} guest{plural}.\n")
				},
				Field::Requirements => format!("Here are my additional requirements: {value}\n")
			};
			message.push_str(&line);
		}

		message.push_str("\nCan you please share availability and details? Thank you!");
		message.trim().to_string()
	}
}

/// How the last submit went
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	Submitted(DeepLinks),
	Rejected(ValidationError)
}

/// The booking enquiry form. There's no separate 'validating' or 'submitted' mode to get stuck
/// in: a submit is checked and resolved in one go and the form stays editable with everything the
/// guest typed still in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryForm {
	fields: EnquiryFields,
	outcome: Option<Outcome>
}

impl EnquiryForm {
	#[must_use]
	pub fn fields(&self) -> &EnquiryFields {
		&self.fields
	}

	#[must_use]
	pub fn outcome(&self) -> Option<&Outcome> {
		self.outcome.as_ref()
	}

	/// Typing into a field also dismisses the previous notice
	pub fn update(&mut self, field: Field, value: String) {
		self.fields.set(field, value);
		self.outcome = None;
	}

	/// Checks the form without recording anything, so the caller can act on the links while
	/// still inside the user's click.
	pub fn check(&self, composer: Option<&DeepLinkComposer>) -> Result<DeepLinks, ValidationError> {
		let composer = composer.ok_or(ValidationError::MissingContact)?;
		composer.compose(MessageContext::Enquiry(&self.fields))
	}

	pub fn record(&mut self, result: Result<DeepLinks, ValidationError>) {
		self.outcome = Some(match result {
			Ok(links) => Outcome::Submitted(links),
			Err(err) => Outcome::Rejected(err)
		});
	}

	#[must_use]
	pub fn notice(&self) -> Option<&'static str> {
		match self.outcome {
			Some(Outcome::Rejected(err)) => Some(err.notice()),
			_ => None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ContactTarget;

	fn composer() -> DeepLinkComposer {
		DeepLinkComposer::new(ContactTarget::parse("+919179567877").unwrap())
	}

	fn submit(form: &mut EnquiryForm, composer: Option<&DeepLinkComposer>) -> Result<DeepLinks, ValidationError> {
		let result = form.check(composer);
		form.record(result.clone());
		result
	}

	fn filled(pairs: &[(Field, &str)]) -> EnquiryFields {
		let mut fields = EnquiryFields::default();
		for (field, value) in pairs {
			fields.set(*field, (*value).to_string());
		}
		fields
	}

	#[test]
	fn every_field_in_order() {
		let fields = filled(&[
			(Field::Requirements, "Ground floor please"),
			(Field::Guests, "3"),
			(Field::Checkin, "12 Jan"),
			(Field::Phone, "9999999999"),
			(Field::FullName, "Asha"),
		]);

		assert_eq!(
			fields.message(),
			"Hello,\n\
			My name is Asha.\n\
			You can reach me at 9999999999.\n\
			I am looking to book a room for check-in on 12 Jan.\n\
			We will be 3 guests.\n\
			Here are my additional requirements: Ground floor please\n\
			\n\
			Can you please share availability and details? Thank you!"
		);
	}

	#[test]
	fn guest_pluralization() {
		let one = filled(&[(Field::Guests, "1")]).message();
		assert!(one.contains("We will be 1 guest.\n"));

		for value in ["2", "0", "01", "lots"] {
			let many = filled(&[(Field::Guests, value)]).message();
			assert!(many.contains(&format!("We will be {value} guests.\n")), "{value}: {many}");
		}
	}

	#[test]
	fn blank_fields_add_no_lines() {
		let fields = filled(&[(Field::Checkin, "   "), (Field::FullName, "Asha")]);
		assert!(!fields.message().contains("check-in"));
	}

	#[test]
	fn update_touches_only_one_field() {
		let mut form = EnquiryForm::default();
		form.update(Field::FullName, "Asha".into());
		form.update(Field::Phone, "123".into());
		form.update(Field::FullName, "Asha R".into());

		assert_eq!(form.fields().full_name, "Asha R");
		assert_eq!(form.fields().phone, "123");
		assert_eq!(form.fields().checkin, "");
	}

	#[test]
	fn rejected_submit_keeps_fields_and_shows_notice() {
		let mut form = EnquiryForm::default();
		form.update(Field::FullName, "Asha".into());
		form.update(Field::Requirements, "late arrival".into());

		assert_eq!(submit(&mut form, Some(&composer())), Err(ValidationError::MissingPhone));
		assert_eq!(form.outcome(), Some(&Outcome::Rejected(ValidationError::MissingPhone)));
		assert!(form.notice().is_some());
		assert_eq!(form.fields().full_name, "Asha");
		assert_eq!(form.fields().requirements, "late arrival");

		// and typing again clears it
		form.update(Field::Phone, "9".into());
		assert_eq!(form.notice(), None);
	}

	#[test]
	fn missing_contact_is_rejected() {
		let mut form = EnquiryForm::default();
		form.update(Field::FullName, "Asha".into());
		form.update(Field::Phone, "9999999999".into());

		assert_eq!(submit(&mut form, None), Err(ValidationError::MissingContact));
	}

	#[test]
	fn successful_submit_records_links() {
		let mut form = EnquiryForm::default();
		form.update(Field::FullName, "Asha".into());
		form.update(Field::Phone, "9999999999".into());

		let links = submit(&mut form, Some(&composer())).unwrap();
		assert_eq!(form.outcome(), Some(&Outcome::Submitted(links)));
		assert_eq!(form.notice(), None);
		assert_eq!(form.fields().full_name, "Asha");
	}

	#[test]
	fn field_names_match_serde_keys() {
		let json = serde_json::to_value(EnquiryFields::default()).unwrap();
		for field in Field::ALL {
			assert!(json.get(field.name()).is_some(), "{} isn't a key", field.name());
		}
	}
}
