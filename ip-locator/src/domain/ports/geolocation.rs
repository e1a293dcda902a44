use crate::domain::errors::AppError;
use serde_json::Value;
use std::future::Future;

pub trait GeolocationRepository: Send + Sync + 'static {
    fn public_ip(&self) -> impl Future<Output = Result<String, AppError>> + Send;
    fn locate(&self, ip: &str) -> impl Future<Output = Result<Value, AppError>> + Send;
}
