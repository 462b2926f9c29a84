//! Schedule-to-jobs compilation and the live-reload scheduler.
//!
//! A validated config document is compiled into discrete trigger instants
//! ([`slots`]), each rendered as a cron expression ([`cron`]) and
//! registered as an independently firing job against the trigger engine
//! ([`engine`]). The [`Scheduler`] owns the live job set and swaps it
//! make-before-break on reload; [`ConfigWatcher`] drives reloads from
//! config file changes. Each job body is wrapped so a failing or
//! panicking fetch never reaches the engine's dispatch loop ([`task`]).

mod compile;
mod core;
mod cron;
mod engine;
mod error;
mod slots;
mod task;
mod watch;

pub use self::compile::{compile, CompiledTrigger};
pub use self::core::Scheduler;
pub use self::error::ScheduleError;
pub use self::slots::{expand, TriggerInstant};
pub use self::watch::ConfigWatcher;
