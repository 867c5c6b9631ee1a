//! Site-relative URLs for scripts the enhancer loads itself.
//!
//! Sites published under a sub-path (GitHub Pages project sites, `/docs`
//! mirrors) set `PUBLIC_URL` at build time; everything else is served from `/`.

const PUBLIC_BASE: Option<&str> = option_env!("PUBLIC_URL");

/// URL of `script` on this deployment. Absolute URLs are returned unchanged.
#[must_use]
pub fn asset_path(script: &str) -> String {
    resolve(script, PUBLIC_BASE.unwrap_or_default())
}

fn resolve(script: &str, base: &str) -> String {
    if script.contains("://") {
        return script.to_string();
    }
    let base = base.trim().trim_end_matches('/');
    let script = script.trim_start_matches("./").trim_start_matches('/');
    format!("{base}/{script}")
}
