use epdx_core::error::EpdError;
use epdx_core::export;
use serde_json::Value;

pub fn print(raw: &Value) -> Result<(), EpdError> {
    println!("{}", export::to_json(raw)?);
    Ok(())
}
