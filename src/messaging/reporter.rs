//! Posts check results back to the consumer.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::messaging::channel::MessageChannel;
use crate::messaging::message::OutboundMessage;
use crate::requirements::{CheckResult, Dependency};

/// Tags results with their outbound command and posts them.
#[derive(Clone)]
pub struct ResultReporter {
    channel: Arc<dyn MessageChannel>,
}

impl ResultReporter {
    /// Create a reporter posting to `channel`.
    pub fn new(channel: Arc<dyn MessageChannel>) -> Self {
        Self { channel }
    }

    /// Post exactly one message for `dependency`.
    ///
    /// Posting failures are logged and otherwise ignored.
    pub fn report(&self, dependency: Dependency, result: CheckResult) {
        debug!(
            command = dependency.report_command(),
            installed = result.is_installed(),
            "Reporting check result"
        );

        if let Err(e) = self.channel.post(OutboundMessage::new(dependency, result)) {
            warn!(%dependency, error = %e, "Failed to post check result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::channel::LocalChannel;

    #[tokio::test]
    async fn report_posts_one_tagged_message() {
        let (channel, mut outbound) = LocalChannel::new();
        let reporter = ResultReporter::new(Arc::new(channel));

        let result = CheckResult::missing("info", "fix");
        reporter.report(Dependency::Xcode, result.clone());

        let message = outbound.recv().await.unwrap();
        assert_eq!(message.dependency(), Dependency::Xcode);
        assert_eq!(message.result(), &result);
        assert!(outbound.try_recv().is_err());
    }

    #[test]
    fn report_survives_closed_channel() {
        let (channel, outbound) = LocalChannel::new();
        drop(outbound);

        let reporter = ResultReporter::new(Arc::new(channel));
        reporter.report(Dependency::Pods, CheckResult::installed("info"));
    }
}
