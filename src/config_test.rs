use super::*;

// =============================================================================
// Config::new — trailing slash normalization.
// =============================================================================

#[test]
fn new_strips_trailing_slash() {
    let config = Config::new("https://api.toollab.fr/");
    assert_eq!(config.base_url, "https://api.toollab.fr");
}

#[test]
fn new_strips_repeated_trailing_slashes() {
    let config = Config::new("http://localhost///");
    assert_eq!(config.base_url, "http://localhost");
}

#[test]
fn new_keeps_clean_url_untouched() {
    let config = Config::new("http://localhost:8000");
    assert_eq!(config.base_url, "http://localhost:8000");
}

// =============================================================================
// Config::from_env — TOOLLAB_API_URL is a shared global, so every scenario
// runs inside one test to avoid races between parallel tests. Env mutation
// requires unsafe in edition 2024.
// =============================================================================

#[test]
fn from_env_scenarios() {
    unsafe { std::env::remove_var(BASE_URL_ENV) };
    assert_eq!(Config::from_env().base_url, DEFAULT_BASE_URL);

    unsafe { std::env::set_var(BASE_URL_ENV, "   ") };
    assert_eq!(Config::from_env().base_url, DEFAULT_BASE_URL, "blank counts as unset");

    unsafe { std::env::set_var(BASE_URL_ENV, "https://api.toollab.fr/") };
    assert_eq!(Config::from_env().base_url, "https://api.toollab.fr");

    unsafe { std::env::remove_var(BASE_URL_ENV) };
}
