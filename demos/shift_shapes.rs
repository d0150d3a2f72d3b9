use glam::DVec2;
use routeshift::{CragShape, apply_shift, path_center_checked};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/crags.json").to_string());

    let mut shapes: Vec<CragShape> = match routeshift::batch::read_shapes(&file) {
        Ok(shapes) => shapes,
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    apply_shift(&mut shapes);

    for shape in &shapes {
        let label = path_center_checked(&shape.path, DVec2::new(shape.x, shape.y));
        println!("{}", shape.name);
        println!("  path:     {}", shape.path);
        println!("  absolute: {}", shape.absolute_path.as_deref().unwrap_or(""));
        match label {
            Some(c) => println!("  label at: {} {}", c.x, c.y),
            None => println!("  label at: (undefined)"),
        }
    }
}
