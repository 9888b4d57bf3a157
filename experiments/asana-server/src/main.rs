use {
    asana::{PoseFeedback, PoseRequest, SessionStats},
    asana_server::ServerConfig,
    base::log,
    com::{ServerEvent, WsServer},
    std::{collections::HashMap, net::SocketAddr},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: asana-server [config.json] [address]");
        std::process::exit(1);
    }

    let mut config = match args.get(1) {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(address) = args.get(2) {
        config.address = address.clone();
    }

    let level = base::parse_level(&config.log_level);
    match &config.log_dir {
        Some(dir) => base::init_file_logger(dir, level)?,
        None => base::init_stdout_logger(level),
    }

    let registry = config.build_registry()?;
    log::info!("{} postures available", registry.len());

    let mut server = WsServer::<PoseRequest, PoseFeedback>::bind(config.address.as_str()).await?;
    log::info!("listening on {}", server.local_addr());

    let mut sessions: HashMap<SocketAddr, SessionStats> = HashMap::new();

    loop {
        let event = tokio::select! {
            event = server.recv() => event?,
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down");
                break;
            }
        };

        match event {
            ServerEvent::Connected(addr) => {
                sessions.insert(addr, SessionStats::default());
            }
            ServerEvent::Message(addr, request) => {
                let evaluation = registry.evaluate_request(&request);
                log::debug!(
                    "{addr}: {} accuracy {:.1}",
                    request.instructions,
                    evaluation.accuracy
                );
                sessions.entry(addr).or_default().record(&evaluation);
                if let Err(e) = server.reply(addr, &PoseFeedback::from(evaluation)).await {
                    log::warn!("reply to {addr} failed: {e}");
                }
            }
            ServerEvent::Disconnected(addr) => {
                if let Some(stats) = sessions.remove(&addr) {
                    log::info!(
                        "{addr}: {} frames, {} correct ({:.1}%)",
                        stats.frames,
                        stats.perfect_frames,
                        stats.perfect_ratio()
                    );
                }
            }
        }
    }

    Ok(())
}
