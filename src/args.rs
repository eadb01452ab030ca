use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};
pub use validation::{MAX_TEE_CACHE_MINUTES, check_http_url};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind_addr: (args.host, args.port),
            course_api_url: args.course_api_url,
            course_api_key: args.course_api_key.filter(|k| !k.trim().is_empty()),
            tee_cache_ttl: chrono::Duration::minutes(
                args.tee_cache_minutes.clamp(1, MAX_TEE_CACHE_MINUTES),
            ),
            course_api_timeout: std::time::Duration::from_secs(args.course_api_timeout_secs),
        }
    }
}
