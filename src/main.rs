fn main() {
    kanva_storefront::run();
}
