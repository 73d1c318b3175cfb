use std::rc::Rc;
use gloo_console::log;
use yew::prelude::*;
use shared_data::{DeepLinkComposer, DeepLinks, MessageContext, RoomListing, SiteConfig};

static SITE_JSON: &str = include_str!("../../site.json");

/// The site config plus the composer built from it, shared with every component through context
#[derive(Clone, PartialEq, Debug)]
pub struct Site {
	pub config: Rc<SiteConfig>,
	/// `None` if no contact number is configured, in which case we hide every contact button
	pub composer: Option<Rc<DeepLinkComposer>>
}

pub type SiteProvider = ContextProvider<Site>;

impl Site {
	#[must_use]
	pub fn new(config: SiteConfig) -> Self {
		let composer = config.composer().map(Rc::new);
		Self { config: Rc::new(config), composer }
	}

	/// A broken site.json shouldn't take the whole page down, so we complain and keep going with
	/// the defaults
	#[must_use]
	pub fn load() -> Self {
		let config = SiteConfig::from_json(SITE_JSON).unwrap_or_else(|e| {
			log!(format!("site.json is invalid, falling back to defaults: {e}"));
			SiteConfig::default()
		});

		Self::new(config)
	}

	#[must_use]
	pub fn links(&self, context: MessageContext<'_>) -> Option<DeepLinks> {
		let composer = self.composer.as_ref()?;
		composer.compose(context)
			.inspect_err(|e| log!(format!("Couldn't compose links: {e}")))
			.ok()
	}

	#[must_use]
	pub fn general_links(&self) -> Option<DeepLinks> {
		self.links(self.config.general_enquiry())
	}

	#[must_use]
	pub fn room_links(&self, room: &RoomListing) -> Option<DeepLinks> {
		self.links(MessageContext::Room(room))
	}
}

#[hook]
pub fn use_site() -> Site {
	use_context::<Site>().unwrap_or_else(Site::load)
}

/// Messaging links get their own browsing context; returns whether the browser let us
pub fn open_in_new_context(uri: &str) -> bool {
	let Some(window) = web_sys::window() else {
		log!("No window to open the link from");
		return false;
	};

	match window.open_with_url_and_target(uri, "_blank") {
		Ok(Some(_)) => true,
		Ok(None) => {
			log!("Opening the messaging link was blocked");
			false
		},
		Err(e) => {
			log!("Couldn't open the messaging link: ", e);
			false
		}
	}
}
