use super::*;

#[test]
fn new_keeps_a_clean_base_url() {
    let config = AppConfig::new("https://api.inkpost.dev");
    assert_eq!(config.backend_url, "https://api.inkpost.dev");
}

#[test]
fn new_trims_trailing_slashes() {
    let config = AppConfig::new("https://api.inkpost.dev/");
    assert_eq!(config.backend_url, "https://api.inkpost.dev");

    let config = AppConfig::new("http://localhost:8787//");
    assert_eq!(config.backend_url, "http://localhost:8787");
}

#[test]
fn from_env_falls_back_to_the_default_url() {
    // BACKEND_URL is not set in the test build.
    let config = AppConfig::from_env();
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
}
