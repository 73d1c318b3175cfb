#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, contactless_site, create_mount_point, default_site, settle};
use wasm_bindgen_test::*;
use yew::prelude::*;
use frontend::{enquiry::BookingEnquiry, site::{Site, SiteProvider}};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
	site: Site
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
	html! {
		<SiteProvider context={ props.site.clone() }>
			<BookingEnquiry />
		</SiteProvider>
	}
}

#[wasm_bindgen_test]
async fn renders_every_field_without_a_notice() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), WrapperProps { site: default_site() }).render();
	settle().await;

	for name in ["fullName", "phone", "checkin", "guests", "requirements"] {
		assert!(
			mount.query_selector(&format!("[name={name}]")).unwrap().is_some(),
			"missing the {name} field"
		);
	}
	assert!(mount.query_selector("#enquiry-notice").unwrap().is_none());

	cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_submit_shows_the_missing_fields_notice() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), WrapperProps { site: default_site() }).render();
	settle().await;

	click(&mount, "#enquiry-submit");
	settle().await;

	let notice = support::find(&mount, "#enquiry-notice");
	assert_eq!(
		notice.text_content().unwrap_or_default(),
		"Please fill your Name and Phone so we can get back to you."
	);

	cleanup(&mount);
}

#[wasm_bindgen_test]
async fn submit_without_contact_explains_why() {
	let mount = create_mount_point();
	yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), WrapperProps { site: contactless_site() }).render();
	settle().await;

	click(&mount, "#enquiry-submit");
	settle().await;

	let notice = support::find(&mount, "#enquiry-notice");
	assert_eq!(
		notice.text_content().unwrap_or_default(),
		"Enquiries are unavailable right now, please call us instead."
	);

	cleanup(&mount);
}
