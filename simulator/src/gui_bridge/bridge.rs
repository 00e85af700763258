use crate::generator::profile::ScenarioConfig;
use crate::gui_bridge::model::TelemetrySnapshot;
use crate::workflow::runner::Runner;
use aadescore::telemetry::{MetricsRecorder, StatusEvent, TransitionLog};
use aadescore::{Advisory, Detection, SensorReport, TrackingEngine};
use anyhow::{Context, Result};
use log::{error, info};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

pub fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Serving-side owner of the latest telemetry snapshot and of the live
/// engine session fed through `/ingest`.
#[derive(Clone)]
pub struct GuiBridge {
    state: Arc<RwLock<TelemetrySnapshot>>,
    engine: Arc<Mutex<TrackingEngine>>,
    transitions: Arc<Mutex<TransitionLog>>,
    metrics: Arc<MetricsRecorder>,
    runner: Arc<Runner>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Result<Self> {
        let engine = TrackingEngine::new(runner.config().engine.clone())
            .context("creating live engine for the telemetry bridge")?;
        Ok(Self {
            state: Arc::new(RwLock::new(TelemetrySnapshot::default())),
            engine: Arc::new(Mutex::new(engine)),
            transitions: Arc::new(Mutex::new(TransitionLog::new())),
            metrics: Arc::new(MetricsRecorder::new()),
            runner,
        })
    }

    fn store(&self, advisory: &Advisory) {
        let snapshot = TelemetrySnapshot::from_advisory(advisory);
        match self.state.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    /// Copies `advisory` into the snapshot store and the event/metric sinks.
    pub fn publish(&self, advisory: &Advisory) -> Option<StatusEvent> {
        self.store(advisory);
        self.metrics.record(advisory);
        lock(&self.transitions).observe(advisory)
    }

    pub fn publish_status(&self, message: &str) {
        info!("[GUI] {}", message);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn telemetry(&self) -> serde_json::Value {
        let logs: Vec<String> = lock(&self.transitions)
            .recent()
            .iter()
            .map(ToString::to_string)
            .collect();
        json!({
            "metrics": self.snapshot(),
            "logs": logs,
            "counters": self.metrics.snapshot(),
        })
    }

    fn ingest(&self, report: Option<SensorReport>) -> Result<Advisory, String> {
        let detection = report
            .map(Detection::try_from)
            .transpose()
            .map_err(|err| err.to_string())?;
        let advisory = lock(&self.engine).tick(detection);
        self.publish(&advisory);
        Ok(advisory)
    }

    /// Runs `config` in its own engine session. Only the final advisory
    /// reaches the snapshot store; the live log and counters are untouched.
    fn ingest_scenario(&self, config: &ScenarioConfig) -> Result<serde_json::Value> {
        let result = self.runner.execute_scenario(config)?;
        if let Some(advisory) = result.final_advisory() {
            self.store(advisory);
        }
        let events: Vec<String> = result
            .status_events
            .iter()
            .map(ToString::to_string)
            .collect();
        if let Some(name) = config.name.as_ref() {
            info!(
                "[GUI] Scenario {} -> {} ticks, {} alerts",
                name, result.counters.ticks, result.counters.collision_alerts
            );
        }
        Ok(json!({
            "status": "ok",
            "ticks": result.counters.ticks,
            "collision_alerts": result.counters.collision_alerts,
            "counters": result.counters,
            "logs": events,
            "final": result.final_advisory(),
            "description": config.description.clone().unwrap_or_default(),
        }))
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone + Send + Sync + 'static
    {
        let bridge = self.clone();
        let bridge_filter = warp::any().map(move || bridge.clone());

        let get_route = warp::path!("api" / "telemetry")
            .and(warp::get())
            .and(bridge_filter.clone())
            .map(|bridge: GuiBridge| warp::reply::json(&bridge.telemetry()));

        let post_route = warp::path("ingest")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(bridge_filter.clone())
            .map(
                |report: Option<SensorReport>, bridge: GuiBridge| match bridge.ingest(report) {
                    Ok(advisory) => {
                        warp::reply::with_status(warp::reply::json(&advisory), StatusCode::OK)
                    }
                    Err(err) => {
                        error!("ingest error: {}", err);
                        warp::reply::with_status(
                            warp::reply::json(&json!({ "status": "error", "error": err })),
                            StatusCode::BAD_REQUEST,
                        )
                    }
                },
            );

        let scenario_route = warp::path("ingest-scenario")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(bridge_filter)
            .map(
                |config: ScenarioConfig, bridge: GuiBridge| match bridge.ingest_scenario(&config) {
                    Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK),
                    Err(err) => {
                        error!("ingest-scenario error: {:#}", err);
                        warp::reply::with_status(
                            warp::reply::json(
                                &json!({ "status": "error", "error": format!("{:#}", err) }),
                            ),
                            StatusCode::BAD_REQUEST,
                        )
                    }
                },
            );

        get_route.or(post_route).or(scenario_route)
    }

    /// Serves the routes from a background thread until the process exits.
    pub fn serve(&self, address: SocketAddr) {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build telemetry runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                warp::serve(routes).run(address).await;
            });
        });
    }
}
