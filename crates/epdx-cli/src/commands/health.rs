use epdx_core::error::EpdError;
use epdx_core::ExtractionClient;

pub async fn run(api_url: &str) -> Result<(), EpdError> {
    let client = ExtractionClient::new(api_url)?;
    let status = client.health_check().await;

    if status.ok {
        match status.version {
            Some(v) => println!("API is healthy (v{v})"),
            None => println!("API is healthy (version unknown)"),
        }
        Ok(())
    } else {
        Err(EpdError::Unhealthy)
    }
}
