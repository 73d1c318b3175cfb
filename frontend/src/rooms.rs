use yew::prelude::*;
use shared_data::RoomListing;
use crate::site::use_site;

fn room_card(room: &RoomListing, actions: Html) -> Html {
	html! {
		<div class="room-card">
			<img src={ room.image.clone() } alt={ room.name.clone() } loading="lazy" />
			<div class="room-details">
				<h3 class="room-name">{ &room.name }</h3>
				<p class="room-description">{ &room.description }</p>
				<div class="room-price">{ room.display_price() }</div>
				<div class="room-actions">{ actions }</div>
			</div>
		</div>
	}
}

#[function_component(RoomGrid)]
pub fn room_grid() -> Html {
	let site = use_site();

	html! {
		<div id="room-grid">
		{
			site.config.rooms.iter().map(|room| {
				// No point offering buttons that can't go anywhere
				let actions = site.room_links(room).map_or_else(Html::default, |links| html! {
					<>
						<a href={ links.message } target="_blank" rel="noopener noreferrer">{ "Book Now" }</a>
						<a href={ links.call }>{ "Call Now" }</a>
					</>
				});

				room_card(room, actions)
			}).collect::<Html>()
		}
		</div>
	}
}
