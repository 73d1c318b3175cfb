// Every test file that does `mod support;` gets its own copy, so not all of these get used in all of
// them
#![allow(dead_code)]

use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use shared_data::SiteConfig;
use frontend::site::Site;

/// A fresh `<div>` hanging off `<body>` to render into
pub fn create_mount_point() -> Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let div = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&div).unwrap();
	div
}

pub fn cleanup(mount: &Element) {
	web_sys::window().unwrap()
		.document().unwrap()
		.body().unwrap()
		.remove_child(mount)
		.ok();
}

/// Gives the scheduler a chance to run renders and effects
pub async fn settle() {
	yew::platform::time::sleep(Duration::ZERO).await;
}

pub fn find(mount: &Element, selector: &str) -> Element {
	mount.query_selector(selector)
		.unwrap()
		.unwrap_or_else(|| panic!("nothing matched {selector}"))
}

pub fn click(mount: &Element, selector: &str) {
	find(mount, selector)
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
}

pub fn default_site() -> Site {
	Site::new(SiteConfig::default())
}

/// A site with nowhere to send enquiries
pub fn contactless_site() -> Site {
	Site::new(SiteConfig { contact: String::new(), ..SiteConfig::default() })
}
