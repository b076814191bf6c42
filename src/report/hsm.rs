use statig::prelude::*;

use super::{DispatchContext, PenEvent};
use crate::types::TouchEvent;

pub(super) struct PenHsm;

#[state_machine(initial = "State::up()")]
impl PenHsm {
    #[state]
    fn up(&mut self, context: &mut DispatchContext, event: &PenEvent) -> Outcome<State> {
        match event {
            PenEvent::Accepted { now_ms, point } => {
                context.emit(TouchEvent::Down);
                context.emit(TouchEvent::Move {
                    x: point.x,
                    y: point.y,
                });
                context.accept(*now_ms, *point);
                Transition(State::down())
            }
            PenEvent::ContactLost | PenEvent::Rejected(_) => Handled,
        }
    }

    #[state]
    fn down(&mut self, context: &mut DispatchContext, event: &PenEvent) -> Outcome<State> {
        match event {
            PenEvent::Accepted { now_ms, point } => {
                context.emit(TouchEvent::Move {
                    x: point.x,
                    y: point.y,
                });
                context.accept(*now_ms, *point);
                Handled
            }
            PenEvent::ContactLost => {
                context.release();
                Transition(State::up())
            }
            PenEvent::Rejected(reason) => {
                log::debug!("ns2009: forced_up reason={}", reason.label());
                context.release();
                Transition(State::up())
            }
        }
    }
}
