fn main() {
    portal_setup::app::cli::run();
}
