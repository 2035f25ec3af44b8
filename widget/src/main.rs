use clap::Parser;

use aqi_widget::{
    config::{Config, Output},
    sink::{JsonSink, TerminalSink},
    source::{FileSource, PurpleAir},
    RenderSink, SensorSource, Shutdown,
};

fn main() {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level())
        .init();

    let shutdown = Shutdown::new();
    {
        let shutdown = shutdown.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            tracing::info!("got SIGINT, stopping");
            shutdown.stop();
        }) {
            tracing::warn!("could not set SIGINT handler: {e}");
        }
    }

    let mut source: Box<dyn SensorSource> = match &config.from_file {
        Some(path) => Box::new(FileSource { path: path.clone() }),
        None => match PurpleAir::new(config.api_url.clone(), config.timeout()) {
            Ok(client) => Box::new(client),
            Err(e) => {
                tracing::error!("could not set up HTTP client: {e}");
                std::process::exit(1);
            }
        },
    };

    let mut sink: Box<dyn RenderSink> = match config.output {
        Output::Terminal => {
            use std::io::IsTerminal;
            let color = !config.no_color && std::io::stdout().is_terminal();
            Box::new(TerminalSink::new(std::io::stdout(), color))
        }
        Output::Json => Box::new(JsonSink::new(std::io::stdout())),
        #[cfg(feature = "screenshot")]
        Output::Png => Box::new(aqi_widget::simulator::ScreenshotSink::new(
            config.png.clone(),
            config.scale,
        )),
        #[cfg(feature = "simulator")]
        Output::Window => Box::new(aqi_widget::simulator::WindowSink::new(config.scale)),
    };

    let result = aqi_widget::run(
        &config.sensor_id,
        source.as_mut(),
        sink.as_mut(),
        config.refresh_interval(),
        &shutdown,
    );
    if result.is_err() {
        std::process::exit(1);
    }
    tracing::info!("done");
}
