use std::rc::Rc;
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use shared_data::{DeepLinks, EnquiryForm, Field, Interaction, ValidationError, ENQUIRY_STYLE};
use crate::site::{open_in_new_context, use_site};

#[derive(Default, PartialEq)]
struct Enquiry(EnquiryForm);

pub enum EnquiryMsg {
	Set(Field, String),
	Resolved(Result<DeepLinks, ValidationError>)
}

impl Reducible for Enquiry {
	type Action = EnquiryMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut form = self.0.clone();

		match action {
			EnquiryMsg::Set(field, value) => form.update(field, value),
			EnquiryMsg::Resolved(result) => form.record(result)
		}

		Self(form).into()
	}
}

#[function_component(BookingEnquiry)]
pub fn booking_enquiry() -> Html {
	let site = use_site();
	let form = use_reducer_eq(Enquiry::default);
	// Only one field can have focus at a time, so there's no point keeping a flag per field
	let focused = use_state(|| Option::<Field>::None);
	let submit_hovered = use_state(|| false);

	let on_submit = {
		let form = form.clone();
		let composer = site.composer.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			// This has to happen inside the submit handler itself or the popup gets blocked
			let result = form.0.check(composer.as_deref());
			match &result {
				Ok(links) => { open_in_new_context(&links.message); },
				Err(err) => log!(format!("Enquiry rejected: {err}"))
			}

			form.dispatch(EnquiryMsg::Resolved(result));
		})
	};

	let field_view = |field: Field| -> Html {
		let value = form.0.fields().get(field).to_string();
		let class = Interaction { hovered: false, focused: *focused == Some(field) }.classes("field");

		let oninput = {
			let form = form.clone();
			Callback::from(move |e: InputEvent| {
				let value = e.target().and_then(|t| {
					t.dyn_into::<HtmlInputElement>().map(|i| i.value())
						.or_else(|t| t.dyn_into::<HtmlTextAreaElement>().map(|t| t.value()))
						.ok()
				});

				if let Some(value) = value {
					form.dispatch(EnquiryMsg::Set(field, value));
				}
			})
		};
		let onfocus = {
			let focused = focused.clone();
			Callback::from(move |_: FocusEvent| focused.set(Some(field)))
		};
		let onblur = {
			let focused = focused.clone();
			Callback::from(move |_: FocusEvent| focused.set(None))
		};

		match field {
			Field::Requirements => html! {
				<textarea
					name={ field.name() }
					placeholder={ field.placeholder() }
					rows="2"
					class={ class }
					value={ value }
					oninput={ oninput }
					onfocus={ onfocus }
					onblur={ onblur }
				/>
			},
			_ => {
				let input_type = match field {
					Field::Phone => "tel",
					Field::Guests => "number",
					_ => "text"
				};

				html! {
					<input
						type={ input_type }
						name={ field.name() }
						placeholder={ field.placeholder() }
						min={ (field == Field::Guests).then_some("1") }
						autocomplete="off"
						required={ field.required() }
						class={ class }
						value={ value }
						oninput={ oninput }
						onfocus={ onfocus }
						onblur={ onblur }
					/>
				}
			}
		}
	};

	let hover = |hovered: bool| {
		let submit_hovered = submit_hovered.clone();
		Callback::from(move |_: MouseEvent| submit_hovered.set(hovered))
	};

	html! {
		<section id="enquiry">
			<style>{ ENQUIRY_STYLE }</style>
			<h2>{ "Room Booking Enquiry" }</h2>
			<form onsubmit={ on_submit } novalidate=true>
				{ field_view(Field::FullName) }
				{ field_view(Field::Phone) }
				<div id="enquiry-row">
					{ field_view(Field::Checkin) }
					{ field_view(Field::Guests) }
				</div>
				{ field_view(Field::Requirements) }
				<button
					id="enquiry-submit"
					type="submit"
					class={ Interaction { hovered: *submit_hovered, focused: false }.classes("submit") }
					onmouseenter={ hover(true) }
					onmouseleave={ hover(false) }
				>
					{ "Enquire via WhatsApp" }
				</button>
				{
					form.0.notice().map_or_else(Html::default, |notice| html! {
						<p id="enquiry-notice" role="alert">{ notice }</p>
					})
				}
			</form>
		</section>
	}
}
