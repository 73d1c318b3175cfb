/// At and above this width the nav links are shown inline and the overlay menu never is
pub const WIDE_LAYOUT_PX: u32 = 768;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	open: bool
}

impl MenuState {
	#[must_use]
	pub fn is_open(self) -> bool {
		self.open
	}

	/// The page underneath shouldn't scroll while the overlay is up
	#[must_use]
	pub fn locks_scroll(self) -> bool {
		self.open
	}

	#[must_use]
	pub fn toggle(self) -> Self {
		Self { open: !self.open }
	}

	#[must_use]
	pub fn close(self) -> Self {
		Self { open: false }
	}

	#[must_use]
	pub fn viewport_resized(self, width: f64) -> Self {
		if width >= f64::from(WIDE_LAYOUT_PX) { self.close() } else { self }
	}

	#[must_use]
	pub fn aria_label(self) -> &'static str {
		if self.open {
			"Close Navigation Menu"
		} else {
			"Open Navigation Menu"
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn double_toggle_is_identity() {
		for start in [MenuState::default(), MenuState::default().toggle()] {
			assert_eq!(start.toggle().toggle(), start);
		}
	}

	#[test]
	fn wide_viewport_always_closes() {
		for start in [MenuState::default(), MenuState::default().toggle()] {
			for width in [768.0, 1024.0, 3840.0] {
				assert!(!start.viewport_resized(width).is_open());
			}
		}
	}

	#[test]
	fn narrow_viewport_leaves_it_alone() {
		let open = MenuState::default().toggle();
		assert!(open.viewport_resized(767.9).is_open());
		assert!(open.locks_scroll());
		assert!(!open.close().locks_scroll());
	}
}
