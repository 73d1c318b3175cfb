#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, default_site, find, settle};
use wasm_bindgen_test::*;
use yew::prelude::*;
use shared_data::WIDE_LAYOUT_PX;
use frontend::{nav::NavBar, site::SiteProvider};

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
	html! {
		<SiteProvider context={ default_site() }>
			<NavBar />
		</SiteProvider>
	}
}

fn body_overflow() -> String {
	web_sys::window().unwrap()
		.document().unwrap()
		.body().unwrap()
		.style()
		.get_property_value("overflow")
		.unwrap()
}

fn menu_open(mount: &web_sys::Element) -> bool {
	find(mount, "#mobile-menu").class_list().contains("open")
}

#[wasm_bindgen_test]
async fn hamburger_opens_and_closes_the_menu() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
	settle().await;

	assert!(!menu_open(&mount));
	assert_eq!(find(&mount, "#hamburger").get_attribute("aria-label").unwrap(), "Open Navigation Menu");

	click(&mount, "#hamburger");
	settle().await;
	assert!(menu_open(&mount));
	assert!(find(&mount, "#menu-overlay").class_list().contains("open"));
	assert_eq!(body_overflow(), "hidden");

	click(&mount, "#hamburger");
	settle().await;
	assert!(!menu_open(&mount));
	assert_eq!(body_overflow(), "");

	cleanup(&mount);
}

#[wasm_bindgen_test]
async fn overlay_and_links_close_the_menu() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
	settle().await;

	click(&mount, "#hamburger");
	settle().await;
	click(&mount, "#menu-overlay");
	settle().await;
	assert!(!menu_open(&mount));

	click(&mount, "#hamburger");
	settle().await;
	click(&mount, "#mobile-menu a[href='#rooms']");
	settle().await;
	assert!(!menu_open(&mount));
	assert_eq!(body_overflow(), "");

	cleanup(&mount);
}

#[wasm_bindgen_test]
async fn resize_past_the_breakpoint_closes_the_menu() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
	settle().await;

	click(&mount, "#hamburger");
	settle().await;
	assert!(menu_open(&mount));

	let window = web_sys::window().unwrap();
	let width = window.inner_width().unwrap().as_f64().unwrap();
	window.dispatch_event(&web_sys::Event::new("resize").unwrap()).unwrap();
	settle().await;

	// Test browsers can't be resized from in here, so check whichever side of the breakpoint
	// this one happens to be on
	if width >= f64::from(WIDE_LAYOUT_PX) {
		assert!(!menu_open(&mount));
		assert_eq!(find(&mount, "#mobile-menu").get_attribute("aria-hidden").unwrap(), "true");
		assert_eq!(body_overflow(), "");
	} else {
		assert!(menu_open(&mount));
		assert_eq!(body_overflow(), "hidden");
		click(&mount, "#hamburger");
		settle().await;
	}

	cleanup(&mount);
}

#[wasm_bindgen_test]
async fn hidden_menu_is_hidden_from_assistive_tech() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
	settle().await;

	let menu = find(&mount, "#mobile-menu");
	assert_eq!(menu.get_attribute("aria-hidden").unwrap(), "true");

	click(&mount, "#hamburger");
	settle().await;
	assert_eq!(find(&mount, "#mobile-menu").get_attribute("aria-hidden").unwrap(), "false");

	click(&mount, "#hamburger");
	settle().await;
	cleanup(&mount);
}
