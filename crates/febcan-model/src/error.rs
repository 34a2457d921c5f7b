/// Layout problems detected in a message definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The declared data length exceeds classic CAN's 8 bytes.
    #[error("message {message} declares {length} data bytes (max 8)")]
    DlcTooLarge { message: String, length: u8 },

    /// A signal was declared with no bits.
    #[error("signal {message}.{signal} has zero length")]
    ZeroLengthSignal { message: String, signal: String },

    /// A signal reaches past the end of the message payload.
    #[error("signal {message}.{signal} occupies bit {bit}, beyond {length}-byte payload")]
    SignalOutOfBounds {
        message: String,
        signal: String,
        bit: u32,
        length: u8,
    },

    /// Two signals claim the same payload bit.
    #[error("signals {message}.{first} and {message}.{second} overlap at bit {bit}")]
    SignalOverlap {
        message: String,
        first: String,
        second: String,
        bit: u32,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
