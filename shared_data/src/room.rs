use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoomListing {
	pub name: String,
	pub description: String,
	/// Per night, in rupees
	pub price: u32,
	pub image: String
}

impl RoomListing {
	#[must_use]
	pub fn display_price(&self) -> String {
		format!("₹{}", self.price)
	}
}

const MEALS: &str = "BREAKFAST LUNCH DINNER GST INCLUDED";

#[must_use]
pub fn default_rooms() -> Vec<RoomListing> {
	[
		("AC ROOM with 2 BED", 1650, "/Rooms/0.webp"),
		("NON AC Room with 2 BED", 1250, "/Rooms/group.jpeg"),
		("AC ROOM with 3 BED", 2050, "/Rooms/2.webp"),
		("NON AC ROOM with 3 BED", 1750, "/Rooms/3.webp"),
		("AC ROOM with 4 BED", 2550, "/Rooms/4bed2.avif"),
		("NON AC ROOM with 4 BED", 2250, "/Rooms/1.webp"),
		("GROUP STAY", 3050, "/Rooms/4bed.jpeg"),
		("FAMILY STAY", 2600, "/Rooms/2.webp"),
	].into_iter()
		.map(|(name, price, image)| RoomListing {
			name: name.into(),
			description: MEALS.into(),
			price,
			image: image.into()
		})
		.collect()
}

/// The little strip of amenities under the about section
pub const FEATURES: [&str; 5] = ["Restaurant", "Dining", "Rooms", "Parking", "WiFi"];

/// (title, description)
pub const SERVICES: [(&str, &str); 4] = [
	(
		"Clean & Hygienic Environment",
		"Regular housekeeping ensuring safe and hygienic stay for families and devotees."
	),
	(
		"Easy Tirupati Room Booking",
		"Hassle-free tirupati hotel booking support with quick check-in and assistance."
	),
	(
		"Prime Location in Tirupati",
		"Conveniently located hotel in Tirupati with easy access to Tirumala routes and transport."
	),
	(
		"24/7 Guest Support",
		"Round-the-clock assistance for room needs, travel queries, and comfort."
	),
];
