fn main() {
    let id = b"user:1337331";

    for _ in 0..10 {
        let encoded = garble::encode(&id[..]);
        let decoded = garble::decode(&encoded).unwrap();
        assert_eq!(decoded, id);
        println!("{}  {}", encoded, String::from_utf8_lossy(&decoded));
    }
}
