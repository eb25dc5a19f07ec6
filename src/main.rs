use personalized_flow::App;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting personalized-flow web app");
    dioxus::launch(App);
}
