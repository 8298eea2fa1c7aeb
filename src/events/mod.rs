//! Event reporting.
//!
//! The engine narrates play as `GameEvent`s handed to an `EventSink`.
//! `ConsoleSink` prints one line per event; a `Vec<GameEvent>` records them.

mod event;

pub use event::GameEvent;

/// Receiver of game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Prints each event as one line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: GameEvent) {
        if let GameEvent::TurnStarted { .. } = event {
            println!();
        }
        println!("{event}");
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut events: Vec<GameEvent> = Vec::new();
        events.emit(GameEvent::TurnStarted { name: "A".into() });
        events.emit(GameEvent::Busted { name: "A".into() });

        assert_eq!(events.len(), 2);
        assert_eq!(events[1], GameEvent::Busted { name: "A".into() });
    }
}
