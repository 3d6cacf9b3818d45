/// Outbound mail seam.
///
/// The dashboard only needs "a warning email was requested for this
/// recipient"; the actual SMTP transport lives outside this service.
/// The production implementation records the dispatch in the log so the
/// whole flow stays observable end to end.
pub trait Mailer: Send + Sync {
    fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Mailer that records dispatches through tracing.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!("Dispatching warning email to {to}: {subject}");
        tracing::debug!("Email body for {to}:\n{body}");
        Ok(())
    }
}

#[cfg(test)]
pub struct RecordingMailer {
    pub sent: std::sync::Mutex<Vec<(String, String, String)>>,
}

#[cfg(test)]
impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[cfg(test)]
impl Mailer for RecordingMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}
