//! Sessions, scheduling, and the terminal front end for Lantern.
//!
//! - [`Session`] ties a world to a dispatcher and a clock
//! - [`EventQueue`] fires inductions when their tick comes
//! - [`Messages`] turns parse failures and refusals into prose
//! - [`Repl`] reads lines from a [`LineEditor`] and prints what happens
//! - [`demo`] builds the sample world the `lantern` binary starts in

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod editor;
pub mod logging;
pub mod messages;
pub mod repl;
pub mod schedule;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use messages::Messages;
pub use repl::Repl;
pub use schedule::{CancelHandle, EventQueue};
pub use session::{Session, TickContext};
