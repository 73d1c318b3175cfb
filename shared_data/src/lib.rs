mod config;
mod contact;
mod deep_link;
mod enquiry;
mod error;
mod menu;
mod policy;
mod rotator;
mod room;
mod style;
mod ui;

pub use config::{SiteConfig, SocialLink};
pub use contact::ContactTarget;
pub use deep_link::{DeepLinkComposer, DeepLinks, MessageContext, WHATSAPP_BASE};
pub use enquiry::{EnquiryFields, EnquiryForm, Field, Outcome};
pub use error::{ConfigError, ValidationError};
pub use menu::{MenuState, WIDE_LAYOUT_PX};
pub use policy::{Block, Policy};
pub use rotator::{Rotator, Tick};
pub use room::{default_rooms, RoomListing, FEATURES, SERVICES};
pub use style::{ENQUIRY_STYLE, FLOATING_STYLE, LANDING_STYLE, POLICY_STYLE};
pub use ui::Interaction;

/// How long a hero image takes to fade in/out, in seconds
pub const CROSS_FADE_SECS: f32 = 1.0;

pub static BASE_STYLE: &str = r#"
* {
	--accent: #ff234d;
	--accent-hover: #e00038;
	--whatsapp: #25d366;
	--nav-background: #d1d5db;
	--nav-border: #9ca3af;
	--main-text: #1f2937;
	--muted-text: #4b5563;
	--field-background: #f3f6fa;
	--field-border: #cbd4e1;
	--field-focus: #24569e;
	--heading-blue: #234073;
	--policy-background: #d9d5cc;
	--policy-text: #5a3206;
	box-sizing: border-box;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	font-family: "Helvetica Neue", Arial, sans-serif;
	color: var(--main-text);
	background-color: white;
	overflow-x: hidden;
}
a {
	color: inherit;
}
img {
	max-width: 100%;
}
.banner {
	color: white;
	text-align: center;
	padding: 48px 16px;
	background-color: var(--accent);
	clip-path: polygon(0 0, 100% 0, 100% 70%, 50% 100%, 0 70%);
}
.banner > h2 {
	max-width: 1024px;
	margin: 0 auto;
	font-size: 32px;
}
.eyebrow {
	letter-spacing: 0.2em;
	color: var(--accent);
	margin-bottom: 8px;
}
.outline-button, .solid-button {
	display: inline-flex;
	align-items: center;
	gap: 8px;
	padding: 8px 24px;
	text-decoration: none;
	transition: background 0.15s, color 0.15s;
}
.outline-button {
	border: 2px solid var(--accent);
	color: var(--accent);
	background-color: transparent;
}
.outline-button.is-hovered, .outline-button.is-focused {
	background-color: var(--accent);
	color: white;
}
.solid-button {
	background-color: var(--accent);
	color: white;
	border: none;
}
.solid-button.is-hovered, .solid-button.is-focused {
	background-color: var(--accent-hover);
}
"#;
