use yew::prelude::*;
use yew_router::prelude::*;
use shared_data::{Block, Policy, POLICY_STYLE};
use crate::{Route, style::PageStyle};

#[derive(Properties, PartialEq, Eq)]
pub struct PolicyProps {
	pub policy: Policy
}

fn block_view(block: &Block) -> Html {
	match block {
		Block::Paragraph(text) => html! { <p>{ *text }</p> },
		Block::Heading(text) => html! { <h2>{ *text }</h2> },
		Block::List(items) => html! {
			<ul>
				{ items.iter().map(|item| html! { <li>{ *item }</li> }).collect::<Html>() }
			</ul>
		}
	}
}

#[function_component(PolicyPage)]
pub fn policy_page(props: &PolicyProps) -> Html {
	// Following a footer link from halfway down the landing page would otherwise leave us
	// halfway down this one too
	use_effect_with(props.policy, |_| {
		if let Some(window) = web_sys::window() {
			window.scroll_to_with_x_and_y(0.0, 0.0);
		}
		|| ()
	});

	html! {
		<>
			<PageStyle css={ POLICY_STYLE } />
			<div id="policy">
				<div id="policy-body">
					<h1>{ props.policy.title() }</h1>
					{ props.policy.blocks().iter().map(block_view).collect::<Html>() }
					<Link<Route> to={ Route::Home } classes={ classes!("back-home-link") }>
						{ "Back to Home" }
					</Link<Route>>
				</div>
			</div>
		</>
	}
}
