fn main() {
    console_error_panic_hook::set_once();
    gallery_viewer::start();
}
