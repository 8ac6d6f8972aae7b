// Tracing definitions
//

use crate::conf::LogFormat;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{
    filter,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    EnvFilter, Registry,
};

static CRATE_NAME: &str = "habitboard";

pub struct TracingSubscriber {
    name: String,
    crate_level: tracing::Level,
    rust_log_fallback: String,
    format: LogFormat,
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self {
            name: CRATE_NAME.into(),
            crate_level: tracing::Level::DEBUG,
            rust_log_fallback: "info".into(),
            format: LogFormat::Plain,
        }
    }
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl AsRef<str>) -> Self {
        self.name = value.as_ref().into();
        self
    }

    pub fn crate_level(mut self, value: tracing::Level) -> Self {
        self.crate_level = value;
        self
    }

    pub fn rust_log_fallback(mut self, value: impl AsRef<str>) -> Self {
        self.rust_log_fallback = value.as_ref().into();
        self
    }

    pub fn format(mut self, value: LogFormat) -> Self {
        self.format = value;
        self
    }

    pub fn set_global_default<Sink>(self, sink: Sink)
    where
        Sink: for<'a> MakeWriter<'a> + Sync + Send + 'static,
    {
        LogTracer::init().expect("Failed to set logger");
        set_global_default(self.build(sink)).expect("Failed to set subscriber");
    }

    pub fn build<Sink>(self, sink: Sink) -> Box<dyn Subscriber + Sync + Send>
    where
        Sink: for<'a> MakeWriter<'a> + Sync + Send + 'static,
    {
        // depends on RUST_LOG env var
        let env_filter = || {
            EnvFilter::try_from_default_env()
                // if unset, use rust_log_fallback
                .unwrap_or_else(|_| EnvFilter::new(&self.rust_log_fallback))
        };

        let target_filter = filter::Targets::new()
            .with_target(CRATE_NAME, self.crate_level)
            .with_target("tower_http::trace", tracing::Level::INFO)
            .with_target("hyper", tracing::Level::INFO)
            .with_target("sled", filter::LevelFilter::OFF)
            .with_default(tracing::Level::INFO);

        match self.format {
            LogFormat::Plain => Box::new(
                Registry::default().with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(sink)
                        .with_filter(env_filter())
                        .with_filter(target_filter),
                ),
            ),
            LogFormat::Pretty => Box::new(
                Registry::default().with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(sink)
                        .with_filter(env_filter())
                        .with_filter(target_filter),
                ),
            ),
            LogFormat::Bunyan => {
                let skip_fields = ["file", "line"];
                let formatting_layer = BunyanFormattingLayer::new(self.name.clone(), sink)
                    .skip_fields(skip_fields.into_iter().map(|s| s.to_owned()))
                    .expect("unable to build the bunyan formatting layer");

                Box::new(
                    Registry::default().with(JsonStorageLayer).with(
                        formatting_layer
                            .with_filter(env_filter())
                            .with_filter(target_filter),
                    ),
                )
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .to_string()
            .parse()
            .ok()?;

        Some(tower_http::request_id::RequestId::new(request_id))
    }
}

fn request_span(request: &hyper::Request<hyper::Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        request_id = %request_id,
    )
}

pub fn request_trace_layer() -> tower::ServiceBuilder<
    tower::layer::util::Stack<
        tower_http::request_id::PropagateRequestIdLayer,
        tower::layer::util::Stack<
            tower_http::trace::TraceLayer<
                tower_http::classify::SharedClassifier<
                    tower_http::classify::ServerErrorsAsFailures,
                >,
                fn(&hyper::Request<hyper::Body>) -> tracing::Span,
            >,
            tower::layer::util::Stack<
                tower_http::request_id::SetRequestIdLayer<RequestIdProducer>,
                tower::layer::util::Identity,
            >,
        >,
    >,
> {
    use tower_http::{
        trace::{DefaultOnRequest, DefaultOnResponse},
        LatencyUnit, ServiceBuilderExt,
    };

    tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(request_span as fn(&hyper::Request<hyper::Body>) -> tracing::Span)
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id()
}

/// Spawns a blocking task in the scope of the current tracing span.
pub fn spawn_blocking_with_tracing<F, R>(f: F) -> tokio::task::JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let current_span = tracing::Span::current();
    tokio::task::spawn_blocking(move || current_span.in_scope(f))
}
