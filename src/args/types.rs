use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, value_name = "HOST", env = "CADDY_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(
        short = 'p',
        long,
        value_name = "PORT",
        env = "CADDY_PORT",
        default_value_t = 5201
    )]
    pub port: u16,
    /// Base URL of the course-data API. Without it every tee lookup returns the default table.
    #[arg(
        long,
        value_name = "COURSE_API_URL",
        env = "COURSE_API_URL",
        value_parser = crate::args::validation::check_http_url
    )]
    pub course_api_url: Option<String>,
    #[arg(long, value_name = "COURSE_API_KEY", env = "COURSE_API_KEY", hide_env_values = true)]
    pub course_api_key: Option<String>,
    /// How long fetched tee sets stay cached.
    #[arg(
        long,
        value_name = "MINUTES",
        env = "TEE_CACHE_MINUTES",
        default_value_t = 60
    )]
    pub tee_cache_minutes: i64,
    #[arg(
        long,
        value_name = "SECONDS",
        env = "COURSE_API_TIMEOUT_SECS",
        default_value_t = 10
    )]
    pub course_api_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind_addr: (String, u16),
    pub course_api_url: Option<String>,
    pub course_api_key: Option<String>,
    pub tee_cache_ttl: chrono::Duration,
    pub course_api_timeout: std::time::Duration,
}
