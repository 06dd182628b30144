//! Event dispatch: session lookup, state machine step, commit, delivery.

use std::sync::Arc;

use jobboard_telegram::{InboundEvent, Transport};
use tracing::{debug, instrument, warn};

use crate::dialog::{Dialog, Outcome};
use crate::error::Result;
use crate::session::SessionStore;
use crate::state::DialogState;

/// Wires the dialog to a session store and a transport.
///
/// Events must be fed one at a time; the poll loop does that, so sessions
/// need no per-chat locking.
#[derive(Clone)]
pub struct Bot {
    dialog: Dialog,
    sessions: SessionStore,
    transport: Arc<dyn Transport>,
}

impl Bot {
    pub fn new(dialog: Dialog, sessions: SessionStore, transport: Arc<dyn Transport>) -> Self {
        Self {
            dialog,
            sessions,
            transport,
        }
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Process one inbound event.
    ///
    /// On error nothing has been sent and the chat's session is untouched.
    /// Delivery failures after a successful step are logged, not returned.
    #[instrument(skip_all, fields(chat_id = event.chat_id()))]
    pub async fn handle(&self, event: &InboundEvent) -> Result<Outcome> {
        let chat_id = event.chat_id();
        let state = self.sessions.get(chat_id).await;
        let from = state.name();

        let transition = self.dialog.step(state, event).await?;
        debug!(
            from,
            to = transition.next.name(),
            outcome = ?transition.outcome,
            actions = transition.outbound.len(),
            "transition"
        );

        if transition.next == DialogState::Idle {
            self.sessions.reset(chat_id).await;
        } else {
            self.sessions.put(chat_id, transition.next).await;
        }

        for action in &transition.outbound {
            if let Err(e) = self.transport.deliver(action).await {
                warn!(error = %e, "failed to deliver outbound action");
            }
        }

        Ok(transition.outcome)
    }
}
