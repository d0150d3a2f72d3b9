use pest::Parser;
use routeshift::{PathParser, Rule};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "M10,20 l-5.5.5 A 5 5 0 0 1 -Infinity 1e3 Z".to_string());

    println!("Parsing: {}", input);
    println!();

    match PathParser::parse(Rule::path, &input) {
        Ok(pairs) => {
            println!(
                "{}",
                pest_ascii_tree::into_ascii_tree(pairs.clone()).unwrap()
            );
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
        }
    }
}
