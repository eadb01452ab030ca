use async_trait::async_trait;
use caddy_score::cache::{Clock, TtlCache};
use caddy_score::controller::tees::{TeeProvider, TeeService, TeeSource};
use caddy_score::error::CoreError;
use caddy_score::model::{Tee, default_tees};
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

enum Behaviour {
    Tees(Vec<Tee>),
    Empty,
    Fail,
}

struct MockProvider {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl MockProvider {
    fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeeProvider for MockProvider {
    async fn tees_for_course(&self, course_id: &str) -> Result<Vec<Tee>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            Behaviour::Tees(tees) => Ok(tees.clone()),
            Behaviour::Empty => Ok(Vec::new()),
            Behaviour::Fail => Err(CoreError::Network(format!("{course_id}: connection reset"))),
        }
    }
}

fn course_tees() -> Vec<Tee> {
    vec![
        Tee::new("Tips", "Black", 75.3, 141),
        Tee::new("Member", "White", 71.0, 128),
    ]
}

fn service(provider: Arc<MockProvider>, cache: TtlCache<String, Vec<Tee>>) -> TeeService {
    TeeService::new(Some(provider as Arc<dyn TeeProvider>), cache)
}

#[test]
fn default_table_has_five_tees() {
    let tees = default_tees();
    let names: Vec<&str> = tees.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Championship", "Blue", "White", "Gold/Senior", "Red"]);
    assert_eq!(tees[0].color, "Black");
    assert_eq!(tees[0].slope_rating, 135);
    assert!((tees[3].course_rating - 68.5).abs() < 1e-9);
    assert!(tees.iter().all(|t| t.validate().is_ok()));
}

#[tokio::test]
async fn unconfigured_provider_uses_defaults() {
    let svc = TeeService::new(None, TtlCache::new(Duration::minutes(60)));
    assert!(!svc.is_configured());
    let lookup = svc.tees_or_default("123").await;
    assert_eq!(lookup.source, TeeSource::Default);
    assert_eq!(lookup.tees, default_tees());
}

#[tokio::test]
async fn provider_result_is_cached() {
    let provider = MockProvider::new(Behaviour::Tees(course_tees()));
    let svc = service(Arc::clone(&provider), TtlCache::new(Duration::minutes(60)));

    let first = svc.tees_or_default("123").await;
    assert_eq!(first.source, TeeSource::Provider);
    assert_eq!(first.tees, course_tees());

    let second = svc.tees_or_default("123").await;
    assert_eq!(second.source, TeeSource::Cache);
    assert_eq!(second.tees, course_tees());
    assert_eq!(provider.calls(), 1);

    svc.tees_or_default("456").await;
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn provider_failure_falls_back_without_caching() {
    let provider = MockProvider::new(Behaviour::Fail);
    let cache = TtlCache::new(Duration::minutes(60));
    let svc = service(Arc::clone(&provider), cache.clone());

    let lookup = svc.tees_or_default("123").await;
    assert_eq!(lookup.source, TeeSource::Default);
    assert_eq!(lookup.tees.len(), 5);
    assert!(cache.is_empty().await);

    svc.tees_or_default("123").await;
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn empty_provider_result_falls_back() {
    let provider = MockProvider::new(Behaviour::Empty);
    let svc = service(provider, TtlCache::new(Duration::minutes(60)));
    let lookup = svc.tees_or_default("123").await;
    assert_eq!(lookup.source, TeeSource::Default);
    assert_eq!(lookup.tees, default_tees());
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let start = Utc::now();
    let now: Arc<Mutex<DateTime<Utc>>> = Arc::new(Mutex::new(start));
    let handle = Arc::clone(&now);
    let clock: Clock = Arc::new(move || *handle.lock().unwrap());

    let provider = MockProvider::new(Behaviour::Tees(course_tees()));
    let svc = service(
        Arc::clone(&provider),
        TtlCache::with_clock(Duration::minutes(30), clock),
    );

    svc.tees_or_default("123").await;
    *now.lock().unwrap() = start + Duration::minutes(29);
    assert_eq!(svc.tees_or_default("123").await.source, TeeSource::Cache);

    *now.lock().unwrap() = start + Duration::minutes(31);
    assert_eq!(svc.tees_or_default("123").await.source, TeeSource::Provider);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn expired_courses_are_evicted_on_the_next_store() {
    let start = Utc::now();
    let now: Arc<Mutex<DateTime<Utc>>> = Arc::new(Mutex::new(start));
    let handle = Arc::clone(&now);
    let clock: Clock = Arc::new(move || *handle.lock().unwrap());

    let cache = TtlCache::with_clock(Duration::minutes(30), clock);
    let svc = service(MockProvider::new(Behaviour::Tees(course_tees())), cache.clone());

    for course in ["101", "102", "103"] {
        svc.tees_or_default(course).await;
    }
    assert_eq!(cache.len().await, 3);

    *now.lock().unwrap() = start + Duration::minutes(31);
    svc.tees_or_default("104").await;
    assert_eq!(cache.len().await, 1);
}
