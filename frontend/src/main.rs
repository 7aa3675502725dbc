fn main() {
    roam_frontend::start();
}
