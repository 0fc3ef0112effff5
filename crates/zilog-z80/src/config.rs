//! CPU configuration.

/// Silicon variant. Only visible through undocumented behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Original NMOS part: `OUT (C),0` drives 0x00.
    #[default]
    Nmos,
    /// CMOS part: `OUT (C),0` drives 0xFF.
    Cmos,
}

impl Variant {
    /// Byte driven by the undocumented `OUT (C),0`.
    #[must_use]
    pub const fn out_zero(self) -> u8 {
        match self {
            Self::Nmos => 0x00,
            Self::Cmos => 0xFF,
        }
    }
}

/// Register values loaded by a reset.
///
/// Real parts leave most registers undefined after reset. Emulators
/// conventionally use AF = SP = 0xFFFF and zero elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetState {
    pub af: u16,
    pub sp: u16,
    pub pc: u16,
}

impl Default for ResetState {
    fn default() -> Self {
        Self {
            af: 0xFFFF,
            sp: 0xFFFF,
            pc: 0x0000,
        }
    }
}

/// Configuration for creating a [`Z80`](crate::Z80).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Z80Config {
    pub variant: Variant,
    pub reset: ResetState,
}
