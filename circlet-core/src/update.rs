use bitflags::bitflags;

bitflags! {
    /// Things the host scheduler should do after a widget mutation.
    ///
    /// Setters record these flags instead of drawing immediately. The host
    /// drains them once per frame, so several mutations between two frames
    /// coalesce into a single pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// Re-evaluate the widget state.
        const EVAL = 1 << 0;
        /// Redraw the widget.
        const DRAW = 1 << 1;
        /// Recompute the widget layout.
        const LAYOUT = 1 << 2;
        /// Force the host to run a full pass, even if nothing else is set.
        const FORCE = 1 << 3;
    }
}
