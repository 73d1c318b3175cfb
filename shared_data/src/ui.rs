/// Hover/focus as plain state, which the view turns into class names instead of poking at inline
/// styles from event handlers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
	pub hovered: bool,
	pub focused: bool
}

impl Interaction {
	#[must_use]
	pub fn classes(self, base: &str) -> String {
		let mut classes = base.to_string();
		if self.hovered {
			classes.push_str(" is-hovered");
		}
		if self.focused {
			classes.push_str(" is-focused");
		}
		classes
	}
}
