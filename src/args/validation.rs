use super::Args;

/// A week; longer than any tee sheet is worth keeping.
pub const MAX_TEE_CACHE_MINUTES: i64 = 7 * 24 * 60;

/// # Errors
///
/// Will return `Err` if the value isn't an http(s) URL
pub fn check_http_url(url: &str) -> Result<String, String> {
    let trimmed = url.trim();
    let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
    else {
        return Err(format!("The course API url '{url}' must start with http:// or https://."));
    };
    if rest.is_empty() || rest.starts_with('/') {
        return Err(format!("The course API url '{url}' has no host."));
    }
    Ok(trimmed.to_string())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a numeric setting is out of range or an API key is given without a URL
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be non-zero.".to_string());
        }
        if !(1..=MAX_TEE_CACHE_MINUTES).contains(&self.tee_cache_minutes) {
            return Err(format!(
                "tee cache minutes must be between 1 and {MAX_TEE_CACHE_MINUTES}, got {}.",
                self.tee_cache_minutes
            ));
        }
        if self.course_api_timeout_secs == 0 {
            return Err("course API timeout must be at least one second.".to_string());
        }
        if self.course_api_key.is_some() && self.course_api_url.is_none() {
            return Err("course API key given without a course API url.".to_string());
        }
        Ok(())
    }
}
