use bitflags::bitflags;

bitflags! {
    /// Flags for authenticator Data
    ///
    /// <https://w3c.github.io/webauthn/#authdata-flags>
    #[repr(transparent)]
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
    pub struct Flags: u8 {
        /// User Present, bit 0
        const UP = 1 << 0;
        /// User Verified, bit 2
        const UV = 1 << 2;
        /// Backup Eligibility, bit 3
        const BE = 1 << 3;
        /// Backup state, bit 4
        const BS = 1 << 4;
        /// Attested Credential Data, bit 6
        const AT = 1 << 6;
        /// Extension Data Included, bit 7
        const ED = 1 << 7;
    }
}

impl Flags {
    /// Whether the authenticator performed a test of user presence.
    pub fn user_present(&self) -> bool {
        self.contains(Flags::UP)
    }

    /// Whether the authenticator verified the user, i.e. with a PIN or biometrics.
    pub fn user_verified(&self) -> bool {
        self.contains(Flags::UV)
    }
}

impl From<Flags> for u8 {
    fn from(src: Flags) -> Self {
        src.bits()
    }
}

impl From<u8> for Flags {
    /// Reserved bits are kept as is so that a flag byte always round trips.
    fn from(value: u8) -> Self {
        Flags::from_bits_retain(value)
    }
}
