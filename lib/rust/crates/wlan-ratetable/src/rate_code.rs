// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{error::RateTableError, phy::Preamble, table::MAX_NSS},
    anyhow::{bail, Error},
    std::convert::TryFrom,
};

const PREAMBLE_SHIFT: u16 = 8;
const PREAMBLE_MASK: u16 = 0x7;
const NSS_SHIFT: u16 = 5;
const NSS_MASK: u16 = 0x7;
const RATE_MASK: u16 = 0x1f;

/// Rate code as written into hardware transmit descriptors.
///
/// Layout:
/// * bits 10..8: preamble (see `Preamble`)
/// * bits  7..5: number of spatial streams minus one
/// * bits  4..0: MCS index, or the legacy rate index for CCK and OFDM
///
/// A code does not carry the channel bandwidth; the same code names the HT/VHT/HE rate at every
/// bandwidth.
#[derive(Hash, PartialEq, Eq, Debug, Copy, Clone, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateCode(pub(crate) u16);

impl std::ops::Deref for RateCode {
    type Target = u16;
    fn deref(&self) -> &u16 {
        &self.0
    }
}

impl From<u16> for RateCode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl RateCode {
    pub fn new(preamble: Preamble, nss: u8, mcs: u8) -> Result<Self, Error> {
        if nss == 0 || usize::from(nss) > MAX_NSS {
            bail!("Unsupported NSS {} for rate code", nss);
        }
        match preamble {
            Preamble::Cck | Preamble::Ofdm if nss != 1 => {
                bail!("Legacy preamble {:?} is single stream, got NSS {}", preamble, nss)
            }
            _ => (),
        }
        if u16::from(mcs) > RATE_MASK {
            bail!("MCS {} does not fit in a rate code", mcs);
        }
        Ok(Self(
            (u16::from(preamble.into_primitive()) << PREAMBLE_SHIFT)
                | (u16::from(nss - 1) << NSS_SHIFT)
                | u16::from(mcs),
        ))
    }

    pub fn preamble(&self) -> Result<Preamble, RateTableError> {
        Preamble::try_from(((self.0 >> PREAMBLE_SHIFT) & PREAMBLE_MASK) as u8)
    }

    /// Number of spatial streams, 1-based.
    pub fn nss(&self) -> u8 {
        ((self.0 >> NSS_SHIFT) & NSS_MASK) as u8 + 1
    }

    pub fn mcs(&self) -> u8 {
        (self.0 & RATE_MASK) as u8
    }
}

impl std::fmt::Display for RateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RateCode {:#05x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(Preamble::Cck, 1, 0, 0x100; "cck 11 Mbps")]
    #[test_case(Preamble::Ofdm, 1, 7, 0x007; "ofdm 9 Mbps")]
    #[test_case(Preamble::Ht, 2, 0, 0x220; "ht two streams")]
    #[test_case(Preamble::Vht, 3, 6, 0x346; "vht three streams mcs 6")]
    #[test_case(Preamble::He, 4, 13, 0x46d; "he four streams mcs 13")]
    #[test_case(Preamble::He, 8, 13, 0x4ed; "he eight streams mcs 13")]
    fn assemble_rate_code(preamble: Preamble, nss: u8, mcs: u8, raw: u16) {
        let code = RateCode::new(preamble, nss, mcs).expect("valid rate code");
        assert_eq!(*code, raw);
        assert_eq!(code.preamble(), Ok(preamble));
        assert_eq!(code.nss(), nss);
        assert_eq!(code.mcs(), mcs);
    }

    #[test]
    fn reject_unencodable_rate_codes() {
        assert!(RateCode::new(Preamble::He, 0, 0).is_err());
        assert!(RateCode::new(Preamble::He, 9, 0).is_err());
        assert!(RateCode::new(Preamble::Vht, 1, 32).is_err());
        assert!(RateCode::new(Preamble::Cck, 2, 0).is_err());
    }

    #[test]
    fn reserved_preamble_does_not_decode() {
        let code = RateCode::from(0x546);
        assert_eq!(code.preamble(), Err(RateTableError::InvalidPreamble(5)));
        assert_eq!(code.nss(), 3);
        assert_eq!(code.mcs(), 6);
    }

    #[test]
    fn display_rate_code() {
        assert_eq!(format!("{}", RateCode::from(0x46d)), "RateCode 0x46d");
        assert_eq!(format!("{}", RateCode::from(0x3)), "RateCode 0x003");
    }
}
