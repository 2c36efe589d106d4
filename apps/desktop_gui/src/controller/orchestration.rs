//! Intent queue plumbing from widgets to the catalog controller.

use catalog_core::CatalogController;
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

pub fn dispatch_ui_event(tx: &Sender<UiEvent>, event: UiEvent, banner: &mut Option<UiError>) {
    let event_name = event.name();

    match tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *banner = Some(UiError::new(
                UiErrorCategory::EventQueue,
                UiErrorContext::Interaction,
                "UI event queue is full; please retry",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            *banner = Some(UiError::new(
                UiErrorCategory::EventQueue,
                UiErrorContext::Interaction,
                "UI event queue disconnected; restart the application",
            ));
        }
    }
}

/// Applies queued events in arrival order. Returns how many were processed.
pub fn drain_ui_events(
    rx: &Receiver<UiEvent>,
    controller: &mut CatalogController,
    banner: &mut Option<UiError>,
) -> usize {
    let mut processed = 0;
    while let Ok(event) = rx.try_recv() {
        match event {
            UiEvent::Intent(intent) => {
                controller.dispatch(intent);
            }
            UiEvent::DismissBanner => *banner = None,
        }
        processed += 1;
    }
    processed
}
