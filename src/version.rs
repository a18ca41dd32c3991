pub static FOUNDATION_VERSION: &str = env!("CARGO_PKG_VERSION");
