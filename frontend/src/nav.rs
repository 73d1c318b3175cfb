use std::rc::Rc;
use gloo_console::log;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::HtmlElement;
use yew::prelude::*;
use shared_data::{MenuState, SocialLink};
use crate::site::use_site;

/// (label, in-page anchor)
pub const NAV_LINKS: [(&str, &str); 5] = [
	("HOME", "#home"),
	("ABOUT", "#about"),
	("ROOMS", "#rooms"),
	("CONTACT", "#contact"),
	("SERVICES", "#services"),
];

#[derive(PartialEq)]
struct Menu(MenuState);

pub enum MenuMsg {
	Toggle,
	Close,
	Resized(f64)
}

impl Reducible for Menu {
	type Action = MenuMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let next = match action {
			MenuMsg::Toggle => self.0.toggle(),
			MenuMsg::Close => self.0.close(),
			MenuMsg::Resized(width) => self.0.viewport_resized(width)
		};

		if next == self.0 { self } else { Self(next).into() }
	}
}

/// Stops the body from scrolling for as long as it's alive, then puts back whatever overflow the
/// body had before
pub struct ScrollLock {
	body: HtmlElement,
	previous: String
}

impl ScrollLock {
	pub fn engage() -> Option<Self> {
		let Some(body) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body()) else {
				log!("No document body to lock scrolling on");
				return None;
			};

		let style = body.style();
		let previous = style.get_property_value("overflow").unwrap_or_default();
		if let Err(e) = style.set_property("overflow", "hidden") {
			log!("Couldn't lock scrolling: ", e);
			return None;
		}

		Some(Self { body, previous })
	}
}

impl Drop for ScrollLock {
	fn drop(&mut self) {
		let style = self.body.style();
		let res = if self.previous.is_empty() {
			style.remove_property("overflow").map(|_| ())
		} else {
			style.set_property("overflow", &self.previous)
		};

		if let Err(e) = res {
			log!("Couldn't unlock scrolling: ", e);
		}
	}
}

fn social_links(links: &[SocialLink]) -> Html {
	html! {
		<div class="social-links">
		{
			links.iter().map(|link| html! {
				<a
					href={ link.url.clone() }
					target="_blank"
					rel="noopener noreferrer"
					aria-label={ link.label.clone() }
				>{ &link.label }</a>
			}).collect::<Html>()
		}
		</div>
	}
}

fn hamburger(open: bool) -> Html {
	if open {
		html! {
			<svg width="32" height="32" viewBox="0 0 22 22" fill="none">
				<rect x="5" y="15.1422" width="14" height="2" rx="1" transform="rotate(-45 5 15.1422)" fill="currentColor" />
				<rect x="6.41431" y="5" width="14" height="2" rx="1" transform="rotate(45 6.41431 5)" fill="currentColor" />
			</svg>
		}
	} else {
		html! {
			<svg width="32" height="32" viewBox="0 0 22 22" fill="none">
				<rect y="4" width="22" height="2.5" rx="1.25" fill="currentColor" />
				<rect y="9.5" width="22" height="2.5" rx="1.25" fill="currentColor" />
				<rect y="15" width="22" height="2.5" rx="1.25" fill="currentColor" />
			</svg>
		}
	}
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
	let site = use_site();
	let menu = use_reducer_eq(|| Menu(MenuState::default()));
	let open = menu.0.is_open();

	// Wide layouts show the links inline, so the overlay should never survive a resize past the
	// breakpoint
	{
		let dispatcher = menu.dispatcher();
		use_effect_with((), move |()| {
			let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
				let callback = Closure::<dyn Fn()>::new(move || {
					let width = web_sys::window()
						.and_then(|w| w.inner_width().ok())
						.and_then(|w| w.as_f64());

					if let Some(width) = width {
						dispatcher.dispatch(MenuMsg::Resized(width));
					}
				});

				if let Err(e) = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
					log!("Couldn't listen for resizes: ", e);
				}

				Box::new(move || {
					if let Err(e) = window.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
						log!("Couldn't stop listening for resizes: ", e);
					}
				})
			} else {
				Box::new(|| ())
			};

			move || destructor()
		});
	}

	// The lock lives exactly as long as this effect does, so closing the menu or unmounting the
	// nav both release it
	use_effect_with(menu.0.locks_scroll(), |locks| {
		let lock = locks.then(ScrollLock::engage).flatten();
		move || drop(lock)
	});

	let toggle = {
		let dispatcher = menu.dispatcher();
		Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuMsg::Toggle))
	};
	let close = {
		let dispatcher = menu.dispatcher();
		Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuMsg::Close))
	};

	let links = |onclick: Option<Callback<MouseEvent>>| html! {
		<ul class="nav-links">
		{
			NAV_LINKS.iter().map(|(label, href)| html! {
				<li key={ *href }>
					<a href={ *href } onclick={ onclick.clone() }>{ *label }</a>
				</li>
			}).collect::<Html>()
		}
		</ul>
	};

	let open_class = open.then_some("open");

	html! {
		<nav id="top-nav">
			<div id="nav-bar">
				{ social_links(&site.config.social) }
				<button
					id="hamburger"
					type="button"
					aria-label={ menu.0.aria_label() }
					aria-expanded={ open.to_string() }
					onclick={ toggle }
				>
					{ hamburger(open) }
				</button>
				{ links(None) }
			</div>
			<div
				id="menu-overlay"
				class={ classes!(open_class) }
				aria-hidden={ (!open).to_string() }
				onclick={ close.clone() }
			/>
			<div
				id="mobile-menu"
				class={ classes!(open_class) }
				role="dialog"
				aria-modal="true"
				aria-hidden={ (!open).to_string() }
			>
				{ social_links(&site.config.social) }
				{ links(Some(close)) }
			</div>
		</nav>
	}
}
