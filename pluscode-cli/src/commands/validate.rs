use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ValidateResponse<'a> {
    code: &'a str,
    valid: bool,
    short: bool,
    full: bool,
    padded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

pub fn run(code: &str, json: bool) -> Result<()> {
    let reason = match pluscode::validate::check(code) {
        Ok(()) => None,
        Err(pluscode::PlusCodeError::InvalidCodeFormat { reason, .. }) => Some(reason),
        Err(e) => return Err(e.into()),
    };

    let response = ValidateResponse {
        code,
        valid: reason.is_none(),
        short: pluscode::is_short(code),
        full: pluscode::is_full(code),
        padded: pluscode::is_padded(code),
        reason,
    };
    tracing::debug!(code, valid = response.valid, "validated code");

    if json {
        println!("{}", serde_json::to_string(&response)?);
    } else if let Some(reason) = response.reason {
        println!("invalid: {}", reason);
    } else {
        let kind = if response.full { "full" } else { "short" };
        let padded = if response.padded { ", padded" } else { "" };
        println!("valid ({}{})", kind, padded);
    }

    Ok(())
}
