pub mod args;
pub mod cache;
pub mod error;
pub mod model;
pub mod score;
pub mod controller {
    pub mod posting;
    pub mod score;
    pub mod tees;
}

use std::sync::Arc;

use cache::TtlCache;
use controller::tees::{HttpTeeProvider, TeeProvider, TeeService};
use error::CoreError;

/// Builds the tee service the server shares across workers.
///
/// # Errors
///
/// Will return `Err` if the HTTP client for the course-data provider can't be built
pub fn build_tee_service(args: &args::CleanArgs) -> Result<TeeService, CoreError> {
    let provider = match &args.course_api_url {
        Some(url) => {
            let http = HttpTeeProvider::new(
                url,
                args.course_api_key.clone(),
                args.course_api_timeout,
            )?;
            Some(Arc::new(http) as Arc<dyn TeeProvider>)
        }
        None => None,
    };
    Ok(TeeService::new(provider, TtlCache::new(args.tee_cache_ttl)))
}
