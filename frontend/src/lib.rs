use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;
use policy::PolicyPage;
use shared_data::Policy;
use site::{Site, SiteProvider};

pub mod contact;
pub mod enquiry;
pub mod home;
pub mod nav;
pub mod policy;
pub mod rooms;
pub mod site;
pub mod slideshow;
mod style;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/:slug")]
	Page { slug: String }
}

impl Route {
	#[must_use]
	pub fn policy(policy: Policy) -> Self {
		Self::Page { slug: policy.slug().into() }
	}
}

#[function_component(Switched)]
fn switched(props: &SwitchedProps) -> Html {
	let site = site::use_site();

	match &props.route {
		Route::Home => html! { <Home /> },
		// Anything that isn't a policy we actually publish just gets the landing page
		Route::Page { slug } => match Policy::from_slug(slug).filter(|p| site.config.policy_enabled(*p)) {
			Some(policy) => html! { <PolicyPage policy={ policy } /> },
			None => html! { <Home /> }
		}
	}
}

#[derive(Properties, PartialEq)]
struct SwitchedProps {
	route: Route
}

fn switch(route: Route) -> Html {
	html! { <Switched route={ route } /> }
}

#[derive(Properties, PartialEq)]
pub struct FrontendProps {
	pub site: Site
}

impl Default for FrontendProps {
	fn default() -> Self {
		Self { site: Site::load() }
	}
}

#[function_component(Frontend)]
pub fn frontend(props: &FrontendProps) -> Html {
	html! {
		<SiteProvider context={ props.site.clone() }>
			<BrowserRouter>
				<Switch<Route> render={ switch } />
			</BrowserRouter>
		</SiteProvider>
	}
}
