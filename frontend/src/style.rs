use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ shared_data::BASE_STYLE }</style> }
}

#[derive(Properties, PartialEq)]
pub struct PageStyleProps {
	pub css: &'static str
}

/// The base stylesheet plus whatever the page needs on top of it
#[function_component(PageStyle)]
pub fn page_style(props: &PageStyleProps) -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ props.css }</style>
		</>
	}
}
