//! Pipeline latch entry interface.
//!
//! Every latch entry type knows how to neutralize itself: force the fields
//! that change architectural state to their no-op value so that the
//! instruction it carries becomes a bubble.

/// Contents of a pipeline latch.
pub trait LatchEntry: Clone + Default {
    /// Forces every side-effecting field to its neutral value.
    fn neutralize(&mut self);
}
