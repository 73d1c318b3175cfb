use std::rc::Rc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use shared_data::{Rotator, Tick, CROSS_FADE_SECS};

#[derive(PartialEq)]
struct Slides(Rotator);

enum SlideMsg {
	Fire(Tick)
}

impl Reducible for Slides {
	type Action = SlideMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		match action {
			SlideMsg::Fire(tick) => {
				let next = self.0.fire(tick);
				if next == self.0 { self } else { Self(next).into() }
			}
		}
	}
}

#[derive(Properties, PartialEq)]
pub struct HeroSlideshowProps {
	pub images: Rc<[String]>,
	pub interval_ms: u32
}

#[function_component(HeroSlideshow)]
pub fn hero_slideshow(props: &HeroSlideshowProps) -> Html {
	let slides = use_reducer_eq(|| Slides(Rotator::new(props.images.len())));

	// One timer per index. When the index moves (or we unmount), the cleanup drops the old
	// `Timeout`, which cancels it, and the tick it carries is stale anyway
	{
		let dispatcher = slides.dispatcher();
		let tick = slides.0.tick();
		let interval = props.interval_ms;
		use_effect_with(slides.0.epoch(), move |_| {
			let timeout = tick.map(|tick|
				Timeout::new(interval, move || dispatcher.dispatch(SlideMsg::Fire(tick)))
			);

			move || drop(timeout)
		});
	}

	html! {
		<div id="hero-slides">
			{
				props.images.iter().enumerate().map(|(i, src)| html! {
					<img
						key={ format!("{i}-{src}") }
						class="hero-slide"
						src={ src.clone() }
						alt=""
						data-active={ slides.0.is_active(i).to_string() }
						style={ format!(
							"opacity: {}; transition: opacity {CROSS_FADE_SECS}s;",
							slides.0.opacity(i)
						) }
					/>
				}).collect::<Html>()
			}
			<div id="hero-shade" />
		</div>
	}
}
