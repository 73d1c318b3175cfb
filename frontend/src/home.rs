use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared_data::{FEATURES, LANDING_STYLE, SERVICES};
use crate::{
	Route,
	contact::{icon, DeepLinkButton, FloatingContacts, PHONE_ICON, WHATSAPP_ICON},
	enquiry::BookingEnquiry,
	nav::NavBar,
	rooms::RoomGrid,
	site::{use_site, Site},
	slideshow::HeroSlideshow,
	style::PageStyle
};

fn banner(id: Option<&'static str>, text: &'static str) -> Html {
	html! {
		<section class="banner" id={ id }>
			<h2>{ text }</h2>
		</section>
	}
}

/// A "Book Now" button with the general enquiry prefilled, or nothing if there's no number to
/// send it to
fn book_now(site: &Site, class: &'static str) -> Html {
	site.general_links().map_or_else(Html::default, |links| html! {
		<DeepLinkButton
			href={ links.message }
			new_context=true
			class={ class }
			aria_label="Book Now via WhatsApp"
		>
			{ "Book Now" }
		</DeepLinkButton>
	})
}

fn hero(site: &Site) -> Html {
	let config = &site.config;
	let images: Rc<[String]> = config.hero_images.clone().into();

	let actions = site.general_links().map_or_else(Html::default, |links| html! {
		<div id="hero-actions">
			<DeepLinkButton href={ links.call }>
				{ icon(PHONE_ICON) }
				{ format!("Call {}", config.contact_display) }
			</DeepLinkButton>
			<DeepLinkButton href={ links.message } new_context=true>
				{ icon(WHATSAPP_ICON) }
				{ "WhatsApp" }
			</DeepLinkButton>
		</div>
	});

	html! {
		<section id="home">
			<HeroSlideshow images={ images } interval_ms={ config.slide_interval_ms } />
			<div id="hero-content">
				<p class="eyebrow">{ &config.tagline }</p>
				<h1>{ &config.name }</h1>
				<p>{ format!("Address: {}", config.address) }</p>
				{ actions }
			</div>
		</section>
	}
}

fn footer(site: &Site) -> Html {
	let config = &site.config;

	html! {
		<footer>
			<div id="footer-links">
			{
				config.policies.iter().map(|policy| html! {
					<Link<Route> key={ policy.slug() } to={ Route::policy(*policy) }>
						{ policy.title() }
					</Link<Route>>
				}).collect::<Html>()
			}
			</div>
			<p id="credit">{ config.credit() }</p>
		</footer>
	}
}

#[function_component(Home)]
pub fn home() -> Html {
	let site = use_site();
	let config = &site.config;

	let contact_button = site.general_links().map_or_else(Html::default, |links| html! {
		<DeepLinkButton
			href={ links.message }
			new_context=true
			aria_label="Contact Us via WhatsApp"
		>
			{ icon(WHATSAPP_ICON) }
			{ "Contact Us" }
		</DeepLinkButton>
	});

	html! {
		<>
			<PageStyle css={ LANDING_STYLE } />
			<NavBar />
			{ hero(&site) }

			{ banner(None, "Trusted Hotel in Tirupati Near Tirumala Temple Routes") }

			<section id="about" class="split">
				<div>
					<p class="eyebrow">{ "ABOUT US" }</p>
					<h2>{ "Comfortable Hotel in Tirupati Near Tirumala" }</h2>
					<p>{ format!(
						"{} offers peaceful and affordable stay for pilgrims and families visiting Tirupati.",
						config.name
					) }</p>
					<p>{ "Designed for comfort, convenience and spiritual surroundings." }</p>
					{ book_now(&site, "outline-button") }
				</div>
				<img src="/Banner/3.webp" alt={ format!("{} Banner", config.name) } loading="lazy" />
			</section>

			<section id="features">
				<h2>{ "Ideal Tirupati Hotel Booking for Families & Pilgrims" }</h2>
				<div id="feature-list">
					{ FEATURES.iter().map(|feature| html! { <div key={ *feature }>{ *feature }</div> }).collect::<Html>() }
				</div>
			</section>

			{ banner(Some("rooms"), "Comfortable Accommodation in Tirupati for Tirumala Devotees") }
			<RoomGrid />

			<section id="services" class="split">
				<div>
					<p class="eyebrow">{ "OUR SERVICES & FACILITIES" }</p>
					<h2>{ "Your Reliable Stay for Tirupati Darshan" }</h2>
					<p>{ "Our guest house provides spacious and well-ventilated rooms in Tirupati, suitable for families, couples, and solo travelers." }</p>
					{ book_now(&site, "solid-button") }
				</div>
				<div>
				{
					SERVICES.iter().map(|(title, description)| html! {
						<div class="service" key={ *title }>
							<h4>{ *title }</h4>
							<p>{ *description }</p>
						</div>
					}).collect::<Html>()
				}
				</div>
			</section>

			{ banner(None, "Your Reliable Stay for Tirupati and Tirumala Darshan") }

			<div id="gallery-grid">
			{
				config.gallery.iter().enumerate().map(|(i, src)| html! {
					<img
						key={ format!("{i}-{src}") }
						src={ src.clone() }
						alt={ format!("Gallery {}", i + 1) }
						loading="lazy"
					/>
				}).collect::<Html>()
			}
			</div>

			<section id="contact" class="split">
				<div>
					<p class="eyebrow">{ "Contact Us" }</p>
					<h2>{ "Easy Tirupati & Tirumala Room Booking for Devotees" }</h2>
					<p>{ format!(
						"Plan your spiritual journey with confidence. Choose {} for a comfortable and peaceful stay near Tirumala.",
						config.name
					) }</p>
					<p><a href={ format!("mailto:{}", config.email) }>{ &config.email }</a></p>
					{ contact_button }
					<BookingEnquiry />
				</div>
				<iframe
					src={ config.map_embed_url.clone() }
					title="Map"
					loading="lazy"
				/>
			</section>

			{ footer(&site) }
			<FloatingContacts />
		</>
	}
}
