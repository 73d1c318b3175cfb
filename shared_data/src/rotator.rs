/// Which hero image is showing. Advancing is driven from outside by whatever timer the host has;
/// each armed timer carries a [`Tick`] so that a timer which outlived the state it was armed for
/// can't move anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
	len: usize,
	index: usize,
	epoch: u64
}

/// Permission to advance the rotator exactly once, from exactly the state it was taken from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
	epoch: u64
}

impl Rotator {
	/// Always starts on the first image
	#[must_use]
	pub fn new(len: usize) -> Self {
		Self { len, index: 0, epoch: 0 }
	}

	#[must_use]
	pub fn index(&self) -> usize {
		self.index
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Bumped every time the index changes; the host rearms its timer whenever this moves
	#[must_use]
	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	/// `None` if there's nothing to rotate through
	#[must_use]
	pub fn tick(&self) -> Option<Tick> {
		(self.len > 0).then_some(Tick { epoch: self.epoch })
	}

	/// Advances if `tick` was taken from the current state. Stale ticks are ignored.
	#[must_use]
	pub fn fire(self, tick: Tick) -> Self {
		if self.len == 0 || tick.epoch != self.epoch {
			return self;
		}

		Self {
			index: (self.index + 1) % self.len,
			epoch: self.epoch.wrapping_add(1),
			..self
		}
	}

	#[must_use]
	pub fn is_active(&self, index: usize) -> bool {
		index == self.index
	}

	#[must_use]
	pub fn opacity(&self, index: usize) -> f32 {
		if self.is_active(index) { 1.0 } else { 0.0 }
	}
}
