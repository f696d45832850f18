//! Prints the border outline and clip polygon for a path.
//!
//! Usage:
//! ```text
//! cargo run --example border                                  # default shape, width 4
//! cargo run --example border -- "M0,0 L120,0 L120,40 L0,40" 2
//! RUST_LOG=inset_border=debug cargo run --example border
//! ```

use inset_border::{clip_polygon, outline_path, parse_path, BorderError, BorderOffset2D};

const DEFAULT_PATH: &str = "M0,0 L160,0 L160,32 L148,48 L0,48";
const DEFAULT_WIDTH: f64 = 4.0;

fn main() -> Result<(), BorderError> {
    // Default: WARN for everything, INFO for inset_border.
    // Override with RUST_LOG env var (e.g. RUST_LOG=inset_border=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("inset_border=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_PATH.to_owned());
    let width = args
        .next()
        .and_then(|w| w.parse().ok())
        .unwrap_or(DEFAULT_WIDTH);

    let Some(parsed) = parse_path(&path)? else {
        eprintln!("no points in {path:?}");
        return Ok(());
    };
    println!("dims: {} x {}", parsed.dims.x, parsed.dims.y);

    let bordered = BorderOffset2D::new(parsed.vertices, width).execute()?;
    println!("path: {}", outline_path(&bordered));
    println!("clip-path: {}", clip_polygon(&bordered));
    Ok(())
}
