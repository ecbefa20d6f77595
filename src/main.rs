use crate::dashboard::canvas::WsBroadcastCanvas;
use crate::dashboard::status::DashboardStatusSink;
use crate::feed::client::RealtimeDbFeed;
use crate::map::canvas::MapCanvas;
use crate::monitor::reconciler::MarkerReconciler;
use clap::Parser;
use tokio::sync::mpsc;

mod app_context;
mod cli;
mod dashboard;
mod feed;
mod health;
mod http;
mod logging;
mod map;
mod monitor;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let app_context = app_context::init();

    let canvas = WsBroadcastCanvas::new(app_context.scene.clone(), app_context.sockets.clone());
    canvas.set_traffic_enabled(args.traffic_layer).await;
    canvas.set_my_location_enabled(args.my_location_layer).await;
    let status = DashboardStatusSink::new(app_context.scene.clone(), app_context.sockets.clone());

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    tokio::spawn(RealtimeDbFeed::new(args.feed_url.clone()).run(events_tx));
    tokio::spawn(MarkerReconciler::new(canvas, status).run(events_rx));

    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
