use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// Human output is suppressed when `PERSISTKIT_QUIET` is `1` or `true`
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("PERSISTKIT_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
