fn main() {
    let message = "In the beginning, God created the heavens and the earth.";

    let encoded = garble::encode(message);
    let decoded = garble::decode(&encoded).unwrap();

    println!("{}", message);
    println!("-> {}", encoded);
    println!("-> {}", String::from_utf8_lossy(&decoded));
}
