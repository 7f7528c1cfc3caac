fn main() {
    empty_space_finder::run_app();
}
