fn main() {
    matrix_preview::cli::run();
}
