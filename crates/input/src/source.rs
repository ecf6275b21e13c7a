//! Non-blocking key sources.
//!
//! A frame consumes at most one key. What happens to keys queued behind it is
//! decided by [`InputPolicy`].

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::is_stop_key;

/// Treatment of keys still queued after a frame has taken its one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Drop the rest, so held keys never build up lag.
    #[default]
    Discard,
    /// Leave the rest queued for the following frames.
    Backlog,
}

impl InputPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "discard" => Some(InputPolicy::Discard),
            "backlog" => Some(InputPolicy::Backlog),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputPolicy::Discard => "discard",
            InputPolicy::Backlog => "backlog",
        }
    }
}

/// Yields at most one key per call and never waits.
pub trait InputSource {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).poll_key()
    }
}

/// Key events that count as input: presses and terminal auto-repeat.
pub fn accept(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    }
}

/// Pull events from `next` until one key is accepted, then apply `policy`
/// to whatever is still pending.
///
/// A stop key found while discarding replaces the taken key, so a stop
/// request is never dropped behind other input.
pub fn select_key<F>(policy: InputPolicy, mut next: F) -> Result<Option<KeyEvent>>
where
    F: FnMut() -> Result<Option<Event>>,
{
    let mut taken = None;
    while let Some(ev) = next()? {
        if let Some(key) = accept(ev) {
            taken = Some(key);
            break;
        }
    }

    if taken.is_some() && policy == InputPolicy::Discard {
        let mut dropped = 0usize;
        while let Some(ev) = next()? {
            dropped += 1;
            if let Some(stop) = accept(ev).filter(is_stop_key) {
                taken = Some(stop);
            }
        }
        if dropped > 0 {
            tracing::trace!(dropped, "discarded queued input");
        }
    }
    Ok(taken)
}

/// Reads the real terminal through crossterm with a zero poll timeout.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    policy: InputPolicy,
}

impl CrosstermInput {
    pub fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }
}

impl InputSource for CrosstermInput {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        select_key(self.policy, || {
            if event::poll(Duration::ZERO)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })
    }
}

#[derive(Debug, Clone)]
enum Arrival {
    Events(Vec<Event>),
    Fail,
}

/// Input source fed from a script, one batch of arrivals per poll.
///
/// Events arriving in a batch join the pending queue before the poll selects
/// its key, like keys typed between two frames.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    policy: InputPolicy,
    script: VecDeque<Arrival>,
    pending: VecDeque<Event>,
}

impl ScriptedInput {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            policy,
            script: VecDeque::new(),
            pending: VecDeque::new(),
        }
    }

    /// Keys that arrive before the next poll.
    pub fn then(mut self, keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        self.script
            .push_back(Arrival::Events(keys.into_iter().map(Event::Key).collect()));
        self
    }

    /// Arbitrary events that arrive before the next poll.
    pub fn then_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.script
            .push_back(Arrival::Events(events.into_iter().collect()));
        self
    }

    /// A poll with nothing new.
    pub fn idle(self) -> Self {
        self.then(std::iter::empty())
    }

    /// A poll that fails.
    pub fn then_fail(mut self) -> Self {
        self.script.push_back(Arrival::Fail);
        self
    }

    /// Events still waiting to be read.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        match self.script.pop_front() {
            Some(Arrival::Events(events)) => self.pending.extend(events),
            Some(Arrival::Fail) => bail!("scripted input failure"),
            None => {}
        }
        let pending = &mut self.pending;
        select_key(self.policy, || Ok(pending.pop_front()))
    }
}
