use std::io::Write;

use crate::adapters::report::Reporter;
use crate::domain::{errors::AppError, ports::geolocation::GeolocationRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpSource {
    Provided,
    Detected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIp {
    pub ip: String,
    pub source: IpSource,
}

#[derive(Clone)]
pub struct LookupService<R: GeolocationRepository> {
    repo: R,
}

impl<R: GeolocationRepository> LookupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Uses `ip` when given, otherwise asks the echo service.
    pub async fn resolve_ip(&self, ip: Option<String>) -> Result<ResolvedIp, AppError> {
        match ip {
            Some(ip) => Ok(ResolvedIp {
                ip,
                source: IpSource::Provided,
            }),
            None => {
                let ip = self.repo.public_ip().await?;
                tracing::info!(%ip, "Detected public IP address");
                Ok(ResolvedIp {
                    ip,
                    source: IpSource::Detected,
                })
            }
        }
    }

    /// Resolves the address, looks it up and writes the report.
    ///
    /// Failures are returned without being printed; nothing is retried.
    pub async fn resolve_and_report<W: Write>(
        &self,
        ip: Option<String>,
        reporter: &mut Reporter<W>,
    ) -> Result<(), AppError> {
        let resolved = self.resolve_ip(ip).await?;
        if resolved.source == IpSource::Detected {
            reporter.detected_ip(&resolved.ip)?;
        }

        tracing::debug!(ip = %resolved.ip, "Looking up location");
        let data = self.repo.locate(&resolved.ip).await?;
        reporter.response(&data)
    }
}
