use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::{self, Stderr, Write};

pub trait Notifier {
    fn send_message(&self, message: &str) -> Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send_message(&self, message: &str) -> Result<()> {
        (**self).send_message(message)
    }
}

/// Prints blocking user-facing messages to a terminal stream.
pub struct ConsoleNotifier<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> ConsoleNotifier<W> {
        ConsoleNotifier {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl ConsoleNotifier<Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn send_message(&self, message: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();

        writeln!(out, "{}", message).context("an error occurred on writing a notification")?;
        out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_write_one_line_per_message() {
        let notifier = ConsoleNotifier::new(Vec::new());

        notifier.send_message("Order not found").unwrap();
        notifier.send_message("Error saving order. Please try again.").unwrap();

        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            written,
            "Order not found\nError saving order. Please try again.\n"
        );
    }
}
