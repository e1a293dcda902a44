use std::net::IpAddr;

/// Normalizes a user-supplied address.
///
/// Surrounding whitespace is dropped and an empty value counts as absent. The
/// address is otherwise passed through untouched; the lookup API is the judge
/// of what it accepts.
pub fn normalize_ip(raw: Option<&str>) -> Option<String> {
    let ip = raw.map(str::trim).filter(|ip| !ip.is_empty())?;

    if ip.parse::<IpAddr>().is_err() {
        tracing::warn!(ip, "Argument does not look like an IPv4 or IPv6 address, sending it anyway");
    }

    Some(ip.to_owned())
}
