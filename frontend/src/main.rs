use frontend::Frontend;

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
