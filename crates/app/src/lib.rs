pub const NAME: &str = "stock-news";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LINE_LENGTH: usize = 40;
pub const USER_AGENT: &str = concat!("stock-news", "/", env!("CARGO_PKG_VERSION"));
