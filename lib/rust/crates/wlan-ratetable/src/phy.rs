// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::error::RateTableError,
    bitflags::bitflags,
    std::convert::TryFrom,
};

/// PHY generation of a transmission. The numeric values are the hardware preamble numbering and
/// appear in bits 10..8 of a rate code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Preamble {
    Ofdm = 0,
    Cck = 1,
    Ht = 2,
    Vht = 3,
    He = 4,
}

impl Preamble {
    pub fn into_primitive(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Preamble {
    type Error = RateTableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Preamble::Ofdm),
            1 => Ok(Preamble::Cck),
            2 => Ok(Preamble::Ht),
            3 => Ok(Preamble::Vht),
            4 => Ok(Preamble::He),
            other => Err(RateTableError::InvalidPreamble(other)),
        }
    }
}

/// Channel bandwidth ordinal. `Cbw80P80` is only meaningful to the band range resolver, which
/// treats it like `Cbw160`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum ChannelBandwidth {
    Cbw20 = 0,
    Cbw40 = 1,
    Cbw80 = 2,
    Cbw160 = 3,
    Cbw80P80 = 4,
}

impl ChannelBandwidth {
    pub fn into_primitive(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ChannelBandwidth {
    type Error = RateTableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChannelBandwidth::Cbw20),
            1 => Ok(ChannelBandwidth::Cbw40),
            2 => Ok(ChannelBandwidth::Cbw80),
            3 => Ok(ChannelBandwidth::Cbw160),
            4 => Ok(ChannelBandwidth::Cbw80P80),
            other => Err(RateTableError::InvalidBandwidth(other)),
        }
    }
}

/// OFDM guard interval. `Normal` (800 ns) is what callers pass when no GI was specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum GuardInterval {
    Normal = 0,
    /// 400 ns.
    Short = 1,
    /// 1.6 us, HE only.
    Double = 2,
    /// 3.2 us, HE only.
    Quadruple = 3,
}

impl GuardInterval {
    pub fn into_primitive(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GuardInterval {
    type Error = RateTableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GuardInterval::Normal),
            1 => Ok(GuardInterval::Short),
            2 => Ok(GuardInterval::Double),
            3 => Ok(GuardInterval::Quadruple),
            other => Err(RateTableError::InvalidGuardInterval(other)),
        }
    }
}

/// Operating mode of a BSS, used to select which block of the rate table to enumerate.
/// Values 0, 4 and 7 are reserved by firmware and have no rate block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum WlanMode {
    /// 802.11a, 5 GHz OFDM.
    A = 1,
    /// 802.11b, CCK.
    B = 2,
    /// 802.11g, CCK and OFDM.
    G = 3,
    /// 802.11n on 5 GHz.
    Na = 5,
    /// 802.11n on 2.4 GHz.
    Ng = 6,
    Ac = 8,
    /// 802.11ax on 5 GHz.
    Axa = 9,
    /// 802.11ax on 2.4 GHz.
    Axg = 10,
}

impl WlanMode {
    pub fn into_primitive(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for WlanMode {
    type Error = RateTableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WlanMode::A),
            2 => Ok(WlanMode::B),
            3 => Ok(WlanMode::G),
            5 => Ok(WlanMode::Na),
            6 => Ok(WlanMode::Ng),
            8 => Ok(WlanMode::Ac),
            9 => Ok(WlanMode::Axa),
            10 => Ok(WlanMode::Axg),
            other => Err(RateTableError::InvalidMode(other)),
        }
    }
}

/// Coarse modulation class of a rate table row. The declaration order matches the order of the
/// bands in the rate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Modulation {
    Cck,
    Ofdm,
    Ht20,
    Ht40,
    Vht20,
    Vht40,
    Vht80,
    Vht160,
    He20,
    He40,
    He80,
    He160,
}

impl Modulation {
    pub const ALL: [Modulation; 12] = [
        Modulation::Cck,
        Modulation::Ofdm,
        Modulation::Ht20,
        Modulation::Ht40,
        Modulation::Vht20,
        Modulation::Vht40,
        Modulation::Vht80,
        Modulation::Vht160,
        Modulation::He20,
        Modulation::He40,
        Modulation::He80,
        Modulation::He160,
    ];

    pub fn preamble(self) -> Preamble {
        match self {
            Modulation::Cck => Preamble::Cck,
            Modulation::Ofdm => Preamble::Ofdm,
            Modulation::Ht20 | Modulation::Ht40 => Preamble::Ht,
            Modulation::Vht20 | Modulation::Vht40 | Modulation::Vht80 | Modulation::Vht160 => {
                Preamble::Vht
            }
            Modulation::He20 | Modulation::He40 | Modulation::He80 | Modulation::He160 => {
                Preamble::He
            }
        }
    }

    /// Legacy modulations are always 20 MHz.
    pub fn bandwidth(self) -> ChannelBandwidth {
        match self {
            Modulation::Cck
            | Modulation::Ofdm
            | Modulation::Ht20
            | Modulation::Vht20
            | Modulation::He20 => ChannelBandwidth::Cbw20,
            Modulation::Ht40 | Modulation::Vht40 | Modulation::He40 => ChannelBandwidth::Cbw40,
            Modulation::Vht80 | Modulation::He80 => ChannelBandwidth::Cbw80,
            Modulation::Vht160 | Modulation::He160 => ChannelBandwidth::Cbw160,
        }
    }
}

bitflags! {
    /// Operating modes in which a rate may be used. Bit positions are the firmware PHY mode
    /// numbering and must not change.
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct PhyModes: u32 {
        const MODE_11A = 1 << 0;
        const MODE_11G = 1 << 1;
        const MODE_11B = 1 << 2;
        const MODE_11GONLY = 1 << 3;
        const MODE_11NA_HT20 = 1 << 4;
        const MODE_11NG_HT20 = 1 << 5;
        const MODE_11NA_HT40 = 1 << 6;
        const MODE_11NG_HT40 = 1 << 7;
        const MODE_11AC_VHT20 = 1 << 8;
        const MODE_11AC_VHT40 = 1 << 9;
        const MODE_11AC_VHT80 = 1 << 10;
        const MODE_11AC_VHT20_2G = 1 << 11;
        const MODE_11AC_VHT40_2G = 1 << 12;
        const MODE_11AC_VHT80_2G = 1 << 13;
        const MODE_11AC_VHT80_80 = 1 << 14;
        const MODE_11AC_VHT160 = 1 << 15;
        const MODE_11AX_HE20 = 1 << 16;
        const MODE_11AX_HE40 = 1 << 17;
        const MODE_11AX_HE80 = 1 << 18;
        const MODE_11AX_HE80_80 = 1 << 19;
        const MODE_11AX_HE160 = 1 << 20;
        const MODE_11AX_HE20_2G = 1 << 21;
        const MODE_11AX_HE40_2G = 1 << 22;
        const MODE_11AX_HE80_2G = 1 << 23;
        /// Set on rates that cannot be sent with BCC coding, i.e. LDPC only.
        const INVALID_BCC = 1 << 24;

        const CCK = Self::MODE_11G.bits
            | Self::MODE_11B.bits
            | Self::MODE_11NG_HT20.bits
            | Self::MODE_11NG_HT40.bits
            | Self::MODE_11AC_VHT40_2G.bits
            | Self::MODE_11AC_VHT20_2G.bits
            | Self::MODE_11AC_VHT80_2G.bits;
        const OFDM = Self::MODE_11A.bits
            | Self::MODE_11G.bits
            | Self::MODE_11GONLY.bits
            | Self::MODE_11NA_HT20.bits
            | Self::MODE_11NG_HT20.bits
            | Self::MODE_11NA_HT40.bits
            | Self::MODE_11NG_HT40.bits
            | Self::MODE_11AC_VHT40.bits
            | Self::MODE_11AC_VHT20.bits
            | Self::MODE_11AC_VHT80.bits
            | Self::MODE_11AC_VHT40_2G.bits
            | Self::MODE_11AC_VHT20_2G.bits
            | Self::MODE_11AC_VHT80_2G.bits
            | Self::MODE_11AC_VHT160.bits
            | Self::MODE_11AC_VHT80_80.bits;
        const HT20 = Self::MODE_11NA_HT20.bits
            | Self::MODE_11NG_HT20.bits
            | Self::MODE_11NA_HT40.bits
            | Self::MODE_11NG_HT40.bits
            | Self::MODE_11AC_VHT40.bits
            | Self::MODE_11AC_VHT20.bits
            | Self::MODE_11AC_VHT80.bits
            | Self::MODE_11AC_VHT40_2G.bits
            | Self::MODE_11AC_VHT20_2G.bits
            | Self::MODE_11AC_VHT80_2G.bits
            | Self::MODE_11AC_VHT160.bits
            | Self::MODE_11AC_VHT80_80.bits;
        const HT40 = Self::MODE_11NA_HT40.bits
            | Self::MODE_11NG_HT40.bits
            | Self::MODE_11AC_VHT40.bits
            | Self::MODE_11AC_VHT80.bits
            | Self::MODE_11AC_VHT40_2G.bits
            | Self::MODE_11AC_VHT80_2G.bits
            | Self::MODE_11AC_VHT160.bits
            | Self::MODE_11AC_VHT80_80.bits;
        const VHT20 = Self::MODE_11AC_VHT20.bits
            | Self::MODE_11AC_VHT40.bits
            | Self::MODE_11AC_VHT80.bits
            | Self::MODE_11AC_VHT40_2G.bits
            | Self::MODE_11AC_VHT20_2G.bits
            | Self::MODE_11AC_VHT80_2G.bits
            | Self::MODE_11AC_VHT160.bits
            | Self::MODE_11AC_VHT80_80.bits;
        const VHT40 = Self::MODE_11AC_VHT40.bits
            | Self::MODE_11AC_VHT80.bits
            | Self::MODE_11AC_VHT40_2G.bits
            | Self::MODE_11AC_VHT80_2G.bits
            | Self::MODE_11AC_VHT160.bits
            | Self::MODE_11AC_VHT80_80.bits;
        const VHT80 = Self::MODE_11AC_VHT80.bits
            | Self::MODE_11AC_VHT80_2G.bits
            | Self::MODE_11AC_VHT160.bits
            | Self::MODE_11AC_VHT80_80.bits;
        const VHT160 = Self::MODE_11AC_VHT160.bits | Self::MODE_11AC_VHT80_80.bits;
        const HE20 = Self::MODE_11AX_HE20.bits
            | Self::MODE_11AX_HE40.bits
            | Self::MODE_11AX_HE80.bits
            | Self::MODE_11AX_HE20_2G.bits
            | Self::MODE_11AX_HE40_2G.bits
            | Self::MODE_11AX_HE80_2G.bits
            | Self::MODE_11AX_HE80_80.bits
            | Self::MODE_11AX_HE160.bits;
        const HE40 = Self::MODE_11AX_HE40.bits
            | Self::MODE_11AX_HE80.bits
            | Self::MODE_11AX_HE40_2G.bits
            | Self::MODE_11AX_HE80_2G.bits
            | Self::MODE_11AX_HE80_80.bits
            | Self::MODE_11AX_HE160.bits;
        const HE80 = Self::MODE_11AX_HE80.bits
            | Self::MODE_11AX_HE80_2G.bits
            | Self::MODE_11AX_HE80_80.bits
            | Self::MODE_11AX_HE160.bits;
        const HE160 = Self::MODE_11AX_HE80_80.bits | Self::MODE_11AX_HE160.bits;

        const VHT20_LDPC_ONLY = Self::VHT20.bits | Self::INVALID_BCC.bits;
        const VHT40_LDPC_ONLY = Self::VHT40.bits | Self::INVALID_BCC.bits;
        const VHT80_LDPC_ONLY = Self::VHT80.bits | Self::INVALID_BCC.bits;
        const VHT160_LDPC_ONLY = Self::VHT160.bits | Self::INVALID_BCC.bits;
        const HE20_LDPC_ONLY = Self::HE20.bits | Self::INVALID_BCC.bits;
        const HE40_LDPC_ONLY = Self::HE40.bits | Self::INVALID_BCC.bits;
        const HE80_LDPC_ONLY = Self::HE80.bits | Self::INVALID_BCC.bits;
        const HE160_LDPC_ONLY = Self::HE160.bits | Self::INVALID_BCC.bits;
    }
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(0, Preamble::Ofdm)]
    #[test_case(1, Preamble::Cck)]
    #[test_case(2, Preamble::Ht)]
    #[test_case(3, Preamble::Vht)]
    #[test_case(4, Preamble::He)]
    fn preamble_from_primitive(raw: u8, expected: Preamble) {
        assert_eq!(Preamble::try_from(raw), Ok(expected));
        assert_eq!(expected.into_primitive(), raw);
    }

    #[test]
    fn reserved_primitives_are_rejected() {
        assert_eq!(Preamble::try_from(5), Err(RateTableError::InvalidPreamble(5)));
        assert_eq!(ChannelBandwidth::try_from(5), Err(RateTableError::InvalidBandwidth(5)));
        assert_eq!(GuardInterval::try_from(4), Err(RateTableError::InvalidGuardInterval(4)));
        assert_eq!(WlanMode::try_from(0), Err(RateTableError::InvalidMode(0)));
        assert_eq!(WlanMode::try_from(4), Err(RateTableError::InvalidMode(4)));
        assert_eq!(WlanMode::try_from(7), Err(RateTableError::InvalidMode(7)));
        assert_eq!(WlanMode::try_from(11), Err(RateTableError::InvalidMode(11)));
    }

    #[test]
    fn wlan_mode_round_trips() {
        for raw in 0..=u8::MAX {
            if let Ok(mode) = WlanMode::try_from(raw) {
                assert_eq!(mode.into_primitive(), raw);
            }
        }
    }

    #[test]
    fn mode_mask_bits_match_firmware_numbering() {
        assert_eq!(PhyModes::MODE_11A.bits(), 0x1);
        assert_eq!(PhyModes::MODE_11AC_VHT160.bits(), 0x8000);
        assert_eq!(PhyModes::MODE_11AX_HE80_2G.bits(), 0x80_0000);
        assert_eq!(PhyModes::INVALID_BCC.bits(), 0x100_0000);
        assert_eq!(PhyModes::CCK.bits(), 0x38a6);
        assert_eq!(PhyModes::VHT160.bits(), 0xc000);
        assert_eq!(PhyModes::HE160.bits(), 0x18_0000);
    }

    #[test]
    fn ldpc_only_masks_extend_band_masks() {
        assert!(PhyModes::VHT20_LDPC_ONLY.contains(PhyModes::VHT20));
        assert!(PhyModes::HE80_LDPC_ONLY.contains(PhyModes::INVALID_BCC));
        assert!(!PhyModes::HE80.contains(PhyModes::INVALID_BCC));
        assert_eq!(
            PhyModes::HE160_LDPC_ONLY - PhyModes::INVALID_BCC,
            PhyModes::HE160,
        );
    }

    #[test]
    fn wider_bands_are_subsets_of_narrower_bands() {
        assert!(PhyModes::HT20.contains(PhyModes::HT40));
        assert!(PhyModes::VHT20.contains(PhyModes::VHT40));
        assert!(PhyModes::VHT40.contains(PhyModes::VHT80));
        assert!(PhyModes::VHT80.contains(PhyModes::VHT160));
        assert!(PhyModes::HE20.contains(PhyModes::HE40));
        assert!(PhyModes::HE40.contains(PhyModes::HE80));
        assert!(PhyModes::HE80.contains(PhyModes::HE160));
    }

    #[test]
    fn modulation_splits_into_preamble_and_bandwidth() {
        assert_eq!(Modulation::Ht40.preamble(), Preamble::Ht);
        assert_eq!(Modulation::Ht40.bandwidth(), ChannelBandwidth::Cbw40);
        assert_eq!(Modulation::He160.preamble(), Preamble::He);
        assert_eq!(Modulation::He160.bandwidth(), ChannelBandwidth::Cbw160);
        assert_eq!(Modulation::Cck.bandwidth(), ChannelBandwidth::Cbw20);
    }
}
