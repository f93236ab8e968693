//! Analog input trait

/// Errors that can occur during an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogError {
    /// The converter reported a conversion failure
    Conversion,
    /// The requested channel is not wired to this backend
    UnknownChannel(u8),
}

/// Multiplexed analog-to-digital converter
///
/// The converter has one sampling unit shared between channels, so a read
/// always converts whichever channel was selected last. Both methods take
/// `&mut self`: holding the backend exclusively is what keeps a
/// select+read pair from interleaving with another one.
pub trait AnalogInput {
    /// Route the converter to channel `id`
    fn select_channel(&mut self, id: u8) -> Result<(), AnalogError>;

    /// Perform one conversion on the selected channel
    ///
    /// Returns a 12-bit value (0-4095).
    fn read(&mut self) -> Result<u16, AnalogError>;
}
