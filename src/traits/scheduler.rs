/// Host facility that invokes a frame callback once per display refresh.
///
/// Replaces the self-rescheduling animation-frame pattern: the host calls
/// the callback as a plain function, and the callback's return value is
/// the registration state.
pub trait FrameScheduler {
    /// Invoke `frame` repeatedly at the host cadence.
    ///
    /// Stops as soon as `frame` returns `false`; the callback is never
    /// invoked again after that.
    fn drive(&mut self, frame: &mut dyn FnMut() -> bool);
}
