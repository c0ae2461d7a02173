use tokenscan::grammars::content_type;

fn main() {
    let input = std::io::read_to_string(std::io::stdin()).unwrap();
    // Whitespace trimming is the caller's job; the scanner consumes its
    // input exactly as given.
    let tokens = content_type::scan(input.trim()).unwrap();
    println!("{}", serde_json::to_string_pretty(&tokens).unwrap());
}
