use habitboard::conf::{Conf, Env, EnvConf};
use habitboard::startup::Application;
use habitboard::trace::TracingSubscriber;
use tokio::signal::ctrl_c;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Env::derive()?;
    let env_conf = EnvConf::derive(env)?;

    TracingSubscriber::new()
        .format(env_conf.log.format)
        .crate_level(if env.prod() {
            tracing::Level::INFO
        } else {
            tracing::Level::DEBUG
        })
        .rust_log_fallback("info")
        .set_global_default(std::io::stdout);

    tracing::info!("HB__ENV={}", env);

    let conf = Conf::new(env, env_conf);

    let application = Application::build(&conf)?;

    application.server(shutdown_signal()).await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
