fn main() {
    println!("hi");
}