//! Terminal hand-off to child processes.
//!
//! While an installer or the delegate runs with inherited stdio, the
//! parent must stay off the shared streams. A [`TerminalLease`] mutably
//! borrows the output owner for as long as the child holds the terminal,
//! so the borrow checker rejects any parent output in between.

use std::io::Write;
use std::marker::PhantomData;

/// Exclusive hold on the terminal's standard streams for one child.
///
/// Pending parent output is flushed on acquisition so it lands before the
/// child's, and again on release.
#[derive(Debug)]
pub struct TerminalLease<'a> {
    _owner: PhantomData<&'a mut ()>,
}

impl<'a> TerminalLease<'a> {
    /// Take the terminal away from `owner` until the lease is dropped.
    pub fn acquire<T: ?Sized>(_owner: &'a mut T) -> Self {
        flush_std_streams();
        tracing::trace!("Terminal leased to child process");
        Self {
            _owner: PhantomData,
        }
    }
}

impl Drop for TerminalLease<'_> {
    fn drop(&mut self) {
        flush_std_streams();
        tracing::trace!("Terminal returned to parent");
    }
}

fn flush_std_streams() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_is_scoped_to_borrow() {
        let mut owner = String::from("ui");
        {
            let _lease = TerminalLease::acquire(&mut owner);
        }
        owner.push('!');
        assert_eq!(owner, "ui!");
    }
}
