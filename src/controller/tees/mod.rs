pub mod client;

pub use client::{HttpTeeProvider, TeeProvider};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::{TtlCache, format_age};
use crate::model::{Tee, default_tees};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TeeSource {
    Provider,
    Cache,
    Default,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeeLookup {
    pub tees: Vec<Tee>,
    pub source: TeeSource,
}

impl TeeLookup {
    fn defaults() -> Self {
        Self {
            tees: default_tees(),
            source: TeeSource::Default,
        }
    }
}

/// Tee lookups for round completion. Never fails: when the provider is
/// missing, errors out, or has nothing for the course, the default table is
/// returned instead.
#[derive(Clone)]
pub struct TeeService {
    provider: Option<Arc<dyn TeeProvider>>,
    cache: TtlCache<String, Vec<Tee>>,
}

impl TeeService {
    #[must_use]
    pub fn new(provider: Option<Arc<dyn TeeProvider>>, cache: TtlCache<String, Vec<Tee>>) -> Self {
        Self { provider, cache }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn tees_or_default(&self, course_id: &str) -> TeeLookup {
        let Some(provider) = &self.provider else {
            debug!(course_id, "no course-data provider configured, using default tees");
            return TeeLookup::defaults();
        };

        let key = course_id.to_string();
        if let Some((tees, age)) = self.cache.get(&key).await {
            debug!(course_id, age = %format_age(age), "tees served from cache");
            return TeeLookup {
                tees,
                source: TeeSource::Cache,
            };
        }

        match provider.tees_for_course(course_id).await {
            Ok(tees) if !tees.is_empty() => {
                let purged = self.cache.purge_expired().await;
                if purged > 0 {
                    debug!(purged, "dropped expired tee entries");
                }
                self.cache.insert(key, tees.clone()).await;
                TeeLookup {
                    tees,
                    source: TeeSource::Provider,
                }
            }
            Ok(_) => {
                warn!(course_id, "provider returned no tees, using defaults");
                TeeLookup::defaults()
            }
            Err(e) => {
                warn!(course_id, "tee fetch failed: {e}. Falling back to default tees.");
                TeeLookup::defaults()
            }
        }
    }
}
