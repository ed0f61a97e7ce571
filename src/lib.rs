pub mod api;
pub mod core;

pub fn init_logging() {
    // repeated calls from tests or embedding hosts are fine
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
