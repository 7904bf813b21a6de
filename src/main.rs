use amsler_grid::components::app::App;

fn main() {
    amsler_grid::util::init_logging();
    yew::Renderer::<App>::new().render();
}
