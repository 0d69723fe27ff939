use core::fmt;

/// Failure codes reported by window-manager operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmError {
    /// A pixel buffer (or registry slot) could not be allocated.
    OutOfMemory,
    /// Zero width/height, or a size below the window's minimum.
    InvalidGeometry,
    /// The window id does not name a live window.
    UnknownWindow,
    /// A pointer byte arrived out of sync and was dropped.
    MalformedPacket,
}

impl fmt::Display for WmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::InvalidGeometry => write!(f, "invalid window geometry"),
            Self::UnknownWindow => write!(f, "unknown window"),
            Self::MalformedPacket => write!(f, "malformed pointer packet"),
        }
    }
}

pub type WmResult<T = ()> = Result<T, WmError>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn display_strings_are_stable() {
        assert_eq!(WmError::OutOfMemory.to_string(), "out of memory");
        assert_eq!(WmError::UnknownWindow.to_string(), "unknown window");
        assert_eq!(
            WmError::MalformedPacket.to_string(),
            "malformed pointer packet"
        );
    }
}
