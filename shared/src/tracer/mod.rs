use crate::utils::env::get_env;

use opentelemetry::trace::TracerProvider;
use opentelemetry::KeyValue;
use opentelemetry_sdk::trace as sdktrace;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

/// Install the global subscriber: stderr formatting plus an OpenTelemetry
/// layer tagged with the service identity.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let service_name = get_env("SERVICE_NAME", "erp-frontend");
    let service_version = get_env("SERVICE_VERSION", env!("CARGO_PKG_VERSION"));
    let service_environment = get_env("SERVICE_ENVIRONMENT", "local");

    let tracer_provider = sdktrace::TracerProvider::builder()
        .with_config(
            sdktrace::Config::default().with_resource(opentelemetry_sdk::resource::Resource::new(
                vec![
                    KeyValue::new("service.name", service_name.clone()),
                    KeyValue::new("service.version", service_version),
                    KeyValue::new("environment", service_environment),
                ],
            )),
        )
        .build();

    let tracer = tracer_provider
        .tracer_builder(service_name.clone())
        .with_version(env!("CARGO_PKG_VERSION"))
        .build();

    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    // stdout carries the command's JSON output
    let subscriber = Registry::default()
        .with(telemetry_layer)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(service = %service_name, "Tracing initialized");
    Ok(())
}
