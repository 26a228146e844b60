use bitflags::bitflags;

bitflags! {
    /// What changed as the result of a call, so the host knows how much work to do.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The outer window moved; every interior rectangle is unchanged
        const MOVE = 0b00001;
        /// Derived rectangles were recomputed (size, metrics or bounds changed)
        const LAYOUT = 0b00010;
        /// Something must be repainted
        const DRAW = 0b00100;
        /// The cursor affordance changed
        const CURSOR = 0b01000;
        /// The title text changed
        const TITLE = 0b10000;
    }
}
