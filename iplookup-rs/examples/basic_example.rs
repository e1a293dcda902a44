use iplookup_rs::IpLookup;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let lookup = IpLookup::init("YOUR_API_TOKEN", None).expect("failed to build client");

    let ip = match std::env::args().nth(1) {
        Some(ip) => ip,
        None => match lookup.public_ip.fetch().await {
            Ok(ip) => ip,
            Err(e) => {
                eprintln!("could not detect public IP: {e}");
                return;
            }
        },
    };

    match lookup.lookup(&ip).await {
        Ok(data) => println!("{}", serde_json::to_string_pretty(&data).unwrap()),
        Err(e) => eprintln!("lookup failed: {e}"),
    }
}
