fn main() {
    glade::main();
}
