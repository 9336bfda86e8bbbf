fn main() {
    dioxus::launch(article_demo::App);
}
