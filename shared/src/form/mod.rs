pub mod login;
pub mod signup;
pub mod view;

/// A form that holds a busy flag while its request is in flight.
pub(crate) trait BusyFlag {
    fn release_busy(&mut self);
}

/// Borrows a form for the duration of a request and releases its busy flag
/// on drop, so a cancelled `submit` future does not leave the form locked.
pub(crate) struct InFlight<'a, T: BusyFlag>(pub(crate) &'a mut T);

impl<T: BusyFlag> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        self.0.release_busy();
    }
}
