use anyhow::Result;

use crate::domain::{devices, users};
use crate::system::mailer::Mailer;

/// Outcome of a warning-email request.
#[derive(Debug)]
pub enum WarningDispatch {
    /// No such device registered.
    UnknownDevice,
    /// Device exists but no user/email is on file for it.
    NoRecipient,
    Sent { recipient: String },
}

/// Resolves a device to its registered user and hands the warning to the
/// mailer. Pure lookup failures come back as enum arms, not errors, so
/// the handler can pick status codes.
pub async fn dispatch_warning(
    device_id: &str,
    log_line: &str,
    mailer: &dyn Mailer,
) -> Result<WarningDispatch> {
    let Some(device) = devices::repository::get_by_id(device_id).await? else {
        return Ok(WarningDispatch::UnknownDevice);
    };

    let Some(user_id) = device.user_id else {
        return Ok(WarningDispatch::NoRecipient);
    };
    let Some(user) = users::repository::get_by_id(&user_id).await? else {
        return Ok(WarningDispatch::NoRecipient);
    };
    let Some(email) = user.email else {
        return Ok(WarningDispatch::NoRecipient);
    };

    let greeting = user.user_name.as_deref().unwrap_or("user");
    let subject = format!("Security warning for device {}", device.device_id);
    let body = format!(
        "Dear {greeting},\n\n\
         Suspicious activity was detected from your device ({}).\n\n\
         Offending log entry:\n{log_line}\n\n\
         Please review recent access to this machine and change any\n\
         credentials that may have been exposed.\n",
        device.device_id
    );

    mailer.send(&email, &subject, &body)?;

    Ok(WarningDispatch::Sent { recipient: email })
}
