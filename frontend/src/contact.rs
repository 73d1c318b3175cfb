use yew::prelude::*;
use shared_data::{Interaction, FLOATING_STYLE};
use crate::site::use_site;

pub const WHATSAPP_ICON: &str = r#"<svg width="1em" height="1em" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M12 2a10 10 0 0 0-8.6 15.1L2 22l5-1.3A10 10 0 1 0 12 2zm0 18.2a8.2 8.2 0 0 1-4.2-1.2l-.3-.2-3 .8.8-2.9-.2-.3A8.2 8.2 0 1 1 12 20.2zm4.5-6.1c-.2-.1-1.5-.7-1.7-.8s-.4-.1-.6.1-.7.8-.8 1-.3.2-.5.1a6.7 6.7 0 0 1-3.3-2.9c-.2-.4.2-.4.7-1.3a.5.5 0 0 0 0-.4l-.8-1.9c-.2-.5-.4-.4-.6-.4h-.5a1 1 0 0 0-.7.3 3 3 0 0 0-.9 2.2 5.2 5.2 0 0 0 1.1 2.8 11.9 11.9 0 0 0 4.6 4c1.7.7 2.4.8 3.2.7a2.8 2.8 0 0 0 1.8-1.3 2.3 2.3 0 0 0 .2-1.3c-.1-.1-.2-.2-.5-.3z"/></svg>"#;
pub const PHONE_ICON: &str = r#"<svg width="1em" height="1em" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M6.6 10.8a15.1 15.1 0 0 0 6.6 6.6l2.2-2.2a1 1 0 0 1 1-.2 11.4 11.4 0 0 0 3.6.6 1 1 0 0 1 1 1V20a1 1 0 0 1-1 1A17 17 0 0 1 3 4a1 1 0 0 1 1-1h3.5a1 1 0 0 1 1 1 11.4 11.4 0 0 0 .6 3.6 1 1 0 0 1-.3 1z"/></svg>"#;

pub fn icon(svg: &'static str) -> Html {
	Html::from_html_unchecked(AttrValue::Static(svg))
}

#[derive(Properties, PartialEq)]
pub struct DeepLinkButtonProps {
	pub href: AttrValue,
	/// Messaging links open in a new browsing context, call links don't
	#[prop_or_default]
	pub new_context: bool,
	#[prop_or(AttrValue::Static("solid-button"))]
	pub class: AttrValue,
	#[prop_or_default]
	pub id: Option<AttrValue>,
	#[prop_or_default]
	pub aria_label: Option<AttrValue>,
	#[prop_or_default]
	pub children: Children
}

#[function_component(DeepLinkButton)]
pub fn deep_link_button(props: &DeepLinkButtonProps) -> Html {
	let interaction = use_state(Interaction::default);

	macro_rules! set_interaction{
		($field:ident, $val:expr, $event:ty) => {{
			let interaction = interaction.clone();
			Callback::from(move |_: $event| interaction.set(Interaction { $field: $val, ..*interaction }))
		}}
	}

	let (target, rel) = if props.new_context {
		(Some("_blank"), Some("noopener noreferrer"))
	} else {
		(None, None)
	};

	html! {
		<a
			href={ props.href.clone() }
			id={ props.id.clone() }
			class={ interaction.classes(&props.class) }
			target={ target }
			rel={ rel }
			aria-label={ props.aria_label.clone() }
			onmouseenter={ set_interaction!(hovered, true, MouseEvent) }
			onmouseleave={ set_interaction!(hovered, false, MouseEvent) }
			onfocus={ set_interaction!(focused, true, FocusEvent) }
			onblur={ set_interaction!(focused, false, FocusEvent) }
		>
			{ for props.children.iter() }
		</a>
	}
}

/// The round WhatsApp/call buttons that stick to the bottom corners of the page
#[function_component(FloatingContacts)]
pub fn floating_contacts() -> Html {
	let site = use_site();

	let Some(links) = site.general_links() else {
		return html! {};
	};

	html! {
		<>
			<style>{ FLOATING_STYLE }</style>
			<DeepLinkButton
				id="floating-whatsapp"
				class="floating-contact"
				href={ links.message }
				new_context=true
				aria_label="WhatsApp"
			>
				{ icon(WHATSAPP_ICON) }
			</DeepLinkButton>
			<DeepLinkButton
				id="floating-call"
				class="floating-contact"
				href={ links.call }
				aria_label={ format!("Call {}", site.config.contact_display) }
			>
				{ icon(PHONE_ICON) }
			</DeepLinkButton>
		</>
	}
}
