pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const ENV_PREFIX: &str = "SUITETRACE";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_MAX_REDIRECTS: usize = 10;
}

pub mod tree {
    pub const INDENT: &str = "  ";
    pub const ROOT_TITLE: &str = "Root";
}
