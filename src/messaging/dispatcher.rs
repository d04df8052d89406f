//! Routes inbound check commands to the verification engine.
//!
//! The dispatcher subscribes to the channel when set up and runs a receive
//! loop on the tokio runtime. Each recognized command spawns its own check
//! task, so checks run concurrently and are never queued behind each other.
//! Unrecognized messages are dropped.
//!
//! [`Dispatcher::dispose`] answers the commands already received, then ends
//! the subscription. Checks already in flight still report their results
//! unless [`DispatcherOptions::cancel_in_flight_on_dispose`] is set.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::messaging::channel::{MessageChannel, Subscription};
use crate::messaging::message::InboundCommand;
use crate::messaging::reporter::ResultReporter;
use crate::requirements::VerificationEngine;

/// Dispatcher behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherOptions {
    /// Abandon running checks when the dispatcher is disposed.
    pub cancel_in_flight_on_dispose: bool,
}

/// Subscribes to inbound commands and answers each with one result.
pub struct Dispatcher {
    shutdown: CancellationToken,
    in_flight: CancellationToken,
    options: DispatcherOptions,
    receive_loop: Option<JoinHandle<()>>,
}

impl Dispatcher {
    /// Subscribe to `channel` with default options.
    ///
    /// Must be called from within a tokio runtime.
    pub fn setup(engine: Arc<VerificationEngine>, channel: Arc<dyn MessageChannel>) -> Self {
        Self::with_options(engine, channel, DispatcherOptions::default())
    }

    /// Subscribe to `channel`.
    ///
    /// The subscription is taken before this returns, so messages sent
    /// right after setup are not missed.
    pub fn with_options(
        engine: Arc<VerificationEngine>,
        channel: Arc<dyn MessageChannel>,
        options: DispatcherOptions,
    ) -> Self {
        let subscription = channel.subscribe();
        let reporter = ResultReporter::new(channel);
        let shutdown = CancellationToken::new();
        let in_flight = CancellationToken::new();

        let receive_loop = tokio::spawn(receive_loop(
            subscription,
            engine,
            reporter,
            shutdown.clone(),
            in_flight.clone(),
        ));
        info!(?options, "Dispatcher subscribed");

        Self {
            shutdown,
            in_flight,
            options,
            receive_loop: Some(receive_loop),
        }
    }

    /// Whether the receive loop is still running.
    pub fn is_running(&self) -> bool {
        self.receive_loop
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop receiving commands and wait for the receive loop to exit.
    ///
    /// Once this returns, no further inbound message starts a check.
    pub async fn dispose(mut self) {
        self.stop();
        if let Some(handle) = self.receive_loop.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Dispatcher receive loop ended abnormally");
            }
        }
        info!("Dispatcher disposed");
    }

    fn stop(&self) {
        self.shutdown.cancel();
        if self.options.cancel_in_flight_on_dispose {
            self.in_flight.cancel();
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn receive_loop(
    mut subscription: Subscription,
    engine: Arc<VerificationEngine>,
    reporter: ResultReporter,
    shutdown: CancellationToken,
    in_flight: CancellationToken,
) {
    loop {
        let message = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            message = subscription.recv() => match message {
                Some(message) => message,
                None => {
                    info!("Inbound channel closed");
                    return;
                }
            },
        };
        dispatch(&message, &engine, &reporter, &in_flight);
    }

    // Commands received before shutdown are still answered.
    while let Some(message) = subscription.try_recv() {
        dispatch(&message, &engine, &reporter, &in_flight);
    }
}

fn dispatch(
    message: &Value,
    engine: &Arc<VerificationEngine>,
    reporter: &ResultReporter,
    in_flight: &CancellationToken,
) {
    let Some(command) = InboundCommand::decode(message) else {
        debug!(%message, "Ignoring unrecognized message");
        return;
    };

    let dependency = command.dependency();
    debug!(%dependency, "Dispatching check");

    let engine = Arc::clone(engine);
    let reporter = reporter.clone();
    let in_flight = in_flight.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = in_flight.cancelled() => {
                debug!(%dependency, "Check abandoned on dispose");
            }
            result = engine.check(dependency) => reporter.report(dependency, result),
        }
    });
}
