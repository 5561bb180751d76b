// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        phy::{GuardInterval, Modulation, PhyModes},
        rate_code::RateCode,
    },
    static_assertions::const_assert_eq,
};

pub const NUM_CCK_RATES: usize = 4;
pub const NUM_OFDM_RATES: usize = 8;
pub const NUM_HT_MCS: usize = 8;
pub const NUM_VHT_MCS: usize = 12;
pub const NUM_HE_MCS: usize = 14;

pub const MAX_HT_NSS: usize = 4;
pub const MAX_NSS: usize = 8;
// Fewer spatial streams are supported at 160 MHz and 80+80 MHz.
pub const MAX_NSS_AT_160MHZ: usize = 4;

/// Short preamble flag carried in the rate index of a CCK rate. It does not select a row.
pub const CCK_SHORT_PREAMBLE_BIT: u16 = 0x4;

// Notes about the layout:
// Rows are grouped into one band per modulation. HT, VHT and HE bands are split into one block
// per spatial stream, each block holding that band's MCS values in ascending order. Lookups
// compute row numbers from this layout, so rows must never be reordered.
//
//  Band      rows        NSS  MCS
//  CCK         0 -   3   1    -
//  OFDM        4 -  11   1    -
//  HT20       12 -  43   1-4  0-7
//  HT40       44 -  75   1-4  0-7
//  VHT20      76 - 171   1-8  0-11
//  VHT40     172 - 267   1-8  0-11
//  VHT80     268 - 363   1-8  0-11
//  VHT160    364 - 411   1-4  0-11
//  HE20      412 - 523   1-8  0-13
//  HE40      524 - 635   1-8  0-13
//  HE80      636 - 747   1-8  0-13
//  HE160     748 - 803   1-4  0-13
pub const CCK_INDEX: usize = 0;
pub const OFDM_INDEX: usize = CCK_INDEX + NUM_CCK_RATES;
pub const HT20_INDEX: usize = OFDM_INDEX + NUM_OFDM_RATES;
pub const HT40_INDEX: usize = HT20_INDEX + NUM_HT_MCS * MAX_HT_NSS;
pub const VHT20_INDEX: usize = HT40_INDEX + NUM_HT_MCS * MAX_HT_NSS;
pub const VHT40_INDEX: usize = VHT20_INDEX + NUM_VHT_MCS * MAX_NSS;
pub const VHT80_INDEX: usize = VHT40_INDEX + NUM_VHT_MCS * MAX_NSS;
pub const VHT160_INDEX: usize = VHT80_INDEX + NUM_VHT_MCS * MAX_NSS;
pub const HE20_INDEX: usize = VHT160_INDEX + NUM_VHT_MCS * MAX_NSS_AT_160MHZ;
pub const HE40_INDEX: usize = HE20_INDEX + NUM_HE_MCS * MAX_NSS;
pub const HE80_INDEX: usize = HE40_INDEX + NUM_HE_MCS * MAX_NSS;
pub const HE160_INDEX: usize = HE80_INDEX + NUM_HE_MCS * MAX_NSS;
pub const RATE_TABLE_SIZE: usize = HE160_INDEX + NUM_HE_MCS * MAX_NSS_AT_160MHZ;

pub const CCK_END_INDEX: usize = OFDM_INDEX - 1;
pub const OFDM_END_INDEX: usize = HT20_INDEX - 1;

const_assert_eq!(HT20_INDEX, 12);
const_assert_eq!(VHT20_INDEX, 76);
const_assert_eq!(HE20_INDEX, 412);
const_assert_eq!(HE160_INDEX, 748);
const_assert_eq!(RATE_TABLE_SIZE, 804);

impl Modulation {
    /// First row of this modulation's band.
    pub fn table_index(self) -> usize {
        match self {
            Modulation::Cck => CCK_INDEX,
            Modulation::Ofdm => OFDM_INDEX,
            Modulation::Ht20 => HT20_INDEX,
            Modulation::Ht40 => HT40_INDEX,
            Modulation::Vht20 => VHT20_INDEX,
            Modulation::Vht40 => VHT40_INDEX,
            Modulation::Vht80 => VHT80_INDEX,
            Modulation::Vht160 => VHT160_INDEX,
            Modulation::He20 => HE20_INDEX,
            Modulation::He40 => HE40_INDEX,
            Modulation::He80 => HE80_INDEX,
            Modulation::He160 => HE160_INDEX,
        }
    }

    /// Rows per spatial stream block. For CCK and OFDM this is the whole band.
    pub fn mcs_per_nss(self) -> usize {
        match self {
            Modulation::Cck => NUM_CCK_RATES,
            Modulation::Ofdm => NUM_OFDM_RATES,
            Modulation::Ht20 | Modulation::Ht40 => NUM_HT_MCS,
            Modulation::Vht20 | Modulation::Vht40 | Modulation::Vht80 | Modulation::Vht160 => {
                NUM_VHT_MCS
            }
            Modulation::He20 | Modulation::He40 | Modulation::He80 | Modulation::He160 => {
                NUM_HE_MCS
            }
        }
    }

    pub fn max_nss(self) -> usize {
        match self {
            Modulation::Cck | Modulation::Ofdm => 1,
            Modulation::Ht20 | Modulation::Ht40 => MAX_HT_NSS,
            Modulation::Vht160 | Modulation::He160 => MAX_NSS_AT_160MHZ,
            _ => MAX_NSS,
        }
    }

    pub fn band_len(self) -> usize {
        self.mcs_per_nss() * self.max_nss()
    }
}

/// Physical parameters of one rate.
///
/// A figure of 0 means the rate has no variant for that guard interval or for DCM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateEntry {
    /// Empty for rates that are never usable.
    pub valid_modes: PhyModes,
    pub modulation: Modulation,
    pub rate_kbps: u32,
    /// 400 ns guard interval.
    pub rate_kbps_sgi: u32,
    /// 1.6 us guard interval.
    pub rate_kbps_dgi: u32,
    /// 3.2 us guard interval.
    pub rate_kbps_qgi: u32,
    pub rate_kbps_dcm: u32,
    /// Rate reported to upper layers.
    pub user_rate_kbps: u32,
    pub rate_code: RateCode,
}

impl RateEntry {
    pub fn is_valid(&self) -> bool {
        !self.valid_modes.is_empty()
    }

    pub fn requires_ldpc(&self) -> bool {
        self.valid_modes.contains(PhyModes::INVALID_BCC)
    }

    pub fn kbps_for_gi(&self, gi: GuardInterval) -> u32 {
        match gi {
            GuardInterval::Normal => self.rate_kbps,
            GuardInterval::Short => self.rate_kbps_sgi,
            GuardInterval::Double => self.rate_kbps_dgi,
            GuardInterval::Quadruple => self.rate_kbps_qgi,
        }
    }
}

macro_rules! rate {
    (@entry $modes:expr, $modulation:ident, $kbps:expr, $sgi:expr, $dgi:expr, $qgi:expr,
     $dcm:expr, $user:expr, $code:expr) => {
        RateEntry {
            valid_modes: $modes,
            modulation: Modulation::$modulation,
            rate_kbps: $kbps,
            rate_kbps_sgi: $sgi,
            rate_kbps_dgi: $dgi,
            rate_kbps_qgi: $qgi,
            rate_kbps_dcm: $dcm,
            user_rate_kbps: $user,
            rate_code: RateCode($code),
        }
    };
    (INVALID, $($rest:tt)*) => {
        rate!(@entry PhyModes::empty(), $($rest)*)
    };
    ($modes:ident, $($rest:tt)*) => {
        rate!(@entry PhyModes::$modes, $($rest)*)
    };
}

/// Every rate known to the hardware, ordered as described in the layout notes above. Columns are:
/// valid modes, modulation, kbps, SGI kbps, 1.6 us GI kbps, 3.2 us GI kbps, DCM kbps, user kbps,
/// rate code.
pub static RATE_TABLE: [RateEntry; RATE_TABLE_SIZE] = [
    // CCK (row 0)
    rate!(CCK, Cck, 11000, 11000, 0, 0, 0, 11000, 0x100),
    rate!(CCK, Cck, 5500, 5500, 0, 0, 0, 5500, 0x101),
    rate!(CCK, Cck, 2000, 2000, 0, 0, 0, 2000, 0x102),
    rate!(CCK, Cck, 1000, 1000, 0, 0, 0, 1000, 0x103),

    // OFDM (row 4)
    rate!(OFDM, Ofdm, 48000, 48000, 0, 0, 0, 48000, 0x000),
    rate!(OFDM, Ofdm, 24000, 24000, 0, 0, 0, 24000, 0x001),
    rate!(OFDM, Ofdm, 12000, 12000, 0, 0, 0, 12000, 0x002),
    rate!(OFDM, Ofdm, 6000, 6000, 0, 0, 0, 6000, 0x003),
    rate!(OFDM, Ofdm, 54000, 54000, 0, 0, 0, 54000, 0x004),
    rate!(OFDM, Ofdm, 36000, 36000, 0, 0, 0, 36000, 0x005),
    rate!(OFDM, Ofdm, 18000, 18000, 0, 0, 0, 18000, 0x006),
    rate!(OFDM, Ofdm, 9000, 9000, 0, 0, 0, 9000, 0x007),

    // HT-20, 1 spatial stream (row 12)
    rate!(HT20, Ht20, 6500, 7200, 0, 0, 0, 6500, 0x200),
    rate!(HT20, Ht20, 13000, 14400, 0, 0, 0, 13000, 0x201),
    rate!(HT20, Ht20, 19500, 21700, 0, 0, 0, 19500, 0x202),
    rate!(HT20, Ht20, 26000, 28900, 0, 0, 0, 26000, 0x203),
    rate!(HT20, Ht20, 39000, 43300, 0, 0, 0, 39000, 0x204),
    rate!(HT20, Ht20, 52000, 57800, 0, 0, 0, 52000, 0x205),
    rate!(HT20, Ht20, 58500, 65000, 0, 0, 0, 58500, 0x206),
    rate!(HT20, Ht20, 65000, 72200, 0, 0, 0, 65000, 0x207),
    // HT-20, 2 spatial streams (row 20)
    rate!(HT20, Ht20, 13000, 14400, 0, 0, 0, 13000, 0x220),
    rate!(HT20, Ht20, 26000, 28900, 0, 0, 0, 26000, 0x221),
    rate!(HT20, Ht20, 39000, 43300, 0, 0, 0, 39000, 0x222),
    rate!(HT20, Ht20, 52000, 57800, 0, 0, 0, 52000, 0x223),
    rate!(HT20, Ht20, 78000, 86700, 0, 0, 0, 78000, 0x224),
    rate!(HT20, Ht20, 104000, 115600, 0, 0, 0, 104000, 0x225),
    rate!(HT20, Ht20, 117000, 130000, 0, 0, 0, 117000, 0x226),
    rate!(HT20, Ht20, 130000, 144000, 0, 0, 0, 130000, 0x227),
    // HT-20, 3 spatial streams (row 28)
    rate!(HT20, Ht20, 19500, 21700, 0, 0, 0, 19500, 0x240),
    rate!(HT20, Ht20, 39000, 43300, 0, 0, 0, 39000, 0x241),
    rate!(HT20, Ht20, 58500, 65000, 0, 0, 0, 58500, 0x242),
    rate!(HT20, Ht20, 78000, 86700, 0, 0, 0, 78000, 0x243),
    rate!(HT20, Ht20, 117000, 130000, 0, 0, 0, 117000, 0x244),
    rate!(HT20, Ht20, 156000, 173300, 0, 0, 0, 156000, 0x245),
    rate!(HT20, Ht20, 175500, 195000, 0, 0, 0, 175500, 0x246),
    rate!(HT20, Ht20, 195000, 216700, 0, 0, 0, 195000, 0x247),
    // HT-20, 4 spatial streams (row 36)
    rate!(HT20, Ht20, 26000, 28900, 0, 0, 0, 26000, 0x260),
    rate!(HT20, Ht20, 52000, 57800, 0, 0, 0, 52000, 0x261),
    rate!(HT20, Ht20, 78000, 86700, 0, 0, 0, 78000, 0x262),
    rate!(HT20, Ht20, 104000, 115600, 0, 0, 0, 104000, 0x263),
    rate!(HT20, Ht20, 156000, 173300, 0, 0, 0, 156000, 0x264),
    rate!(HT20, Ht20, 208000, 231100, 0, 0, 0, 208000, 0x265),
    rate!(HT20, Ht20, 234000, 260000, 0, 0, 0, 234000, 0x266),
    rate!(HT20, Ht20, 260000, 288900, 0, 0, 0, 260000, 0x267),

    // HT-40, 1 spatial stream (row 44)
    rate!(HT40, Ht40, 13500, 15000, 0, 0, 0, 13500, 0x200),
    rate!(HT40, Ht40, 27000, 30000, 0, 0, 0, 27000, 0x201),
    rate!(HT40, Ht40, 40500, 45000, 0, 0, 0, 40500, 0x202),
    rate!(HT40, Ht40, 54000, 60000, 0, 0, 0, 54000, 0x203),
    rate!(HT40, Ht40, 81500, 90000, 0, 0, 0, 81500, 0x204),
    rate!(HT40, Ht40, 108000, 120000, 0, 0, 0, 108000, 0x205),
    rate!(HT40, Ht40, 121500, 135000, 0, 0, 0, 121500, 0x206),
    rate!(HT40, Ht40, 135000, 150000, 0, 0, 0, 135000, 0x207),
    // HT-40, 2 spatial streams (row 52)
    rate!(HT40, Ht40, 27000, 30000, 0, 0, 0, 27000, 0x220),
    rate!(HT40, Ht40, 54000, 60000, 0, 0, 0, 54000, 0x221),
    rate!(HT40, Ht40, 81000, 90000, 0, 0, 0, 81000, 0x222),
    rate!(HT40, Ht40, 108000, 120000, 0, 0, 0, 108000, 0x223),
    rate!(HT40, Ht40, 162000, 180000, 0, 0, 0, 162000, 0x224),
    rate!(HT40, Ht40, 216000, 240000, 0, 0, 0, 216000, 0x225),
    rate!(HT40, Ht40, 243000, 270000, 0, 0, 0, 243000, 0x226),
    rate!(HT40, Ht40, 270000, 300000, 0, 0, 0, 270000, 0x227),
    // HT-40, 3 spatial streams (row 60)
    rate!(HT40, Ht40, 40500, 45000, 0, 0, 0, 40500, 0x240),
    rate!(HT40, Ht40, 81000, 90000, 0, 0, 0, 81000, 0x241),
    rate!(HT40, Ht40, 121500, 135000, 0, 0, 0, 121500, 0x242),
    rate!(HT40, Ht40, 162000, 180000, 0, 0, 0, 162000, 0x243),
    rate!(HT40, Ht40, 243000, 270000, 0, 0, 0, 243000, 0x244),
    rate!(HT40, Ht40, 324000, 360000, 0, 0, 0, 324000, 0x245),
    rate!(HT40, Ht40, 364500, 405000, 0, 0, 0, 364500, 0x246),
    rate!(HT40, Ht40, 405000, 450000, 0, 0, 0, 405000, 0x247),
    // HT-40, 4 spatial streams (row 68)
    rate!(HT40, Ht40, 54000, 60000, 0, 0, 0, 54000, 0x260),
    rate!(HT40, Ht40, 108000, 120000, 0, 0, 0, 108000, 0x261),
    rate!(HT40, Ht40, 162000, 180000, 0, 0, 0, 162000, 0x262),
    rate!(HT40, Ht40, 216000, 240000, 0, 0, 0, 216000, 0x263),
    rate!(HT40, Ht40, 324000, 360000, 0, 0, 0, 324000, 0x264),
    rate!(HT40, Ht40, 432000, 480000, 0, 0, 0, 432000, 0x265),
    rate!(HT40, Ht40, 486000, 540000, 0, 0, 0, 486000, 0x266),
    rate!(HT40, Ht40, 540000, 600000, 0, 0, 0, 540000, 0x267),

    // VHT-20, 1 spatial stream (row 76)
    rate!(VHT20, Vht20, 6500, 7200, 0, 0, 0, 6500, 0x300),
    rate!(VHT20, Vht20, 13000, 14400, 0, 0, 0, 13000, 0x301),
    rate!(VHT20, Vht20, 19500, 21700, 0, 0, 0, 19500, 0x302),
    rate!(VHT20, Vht20, 26000, 28900, 0, 0, 0, 26000, 0x303),
    rate!(VHT20, Vht20, 39000, 43300, 0, 0, 0, 39000, 0x304),
    rate!(VHT20, Vht20, 52000, 57800, 0, 0, 0, 52000, 0x305),
    rate!(VHT20, Vht20, 58500, 65000, 0, 0, 0, 58500, 0x306),
    rate!(VHT20, Vht20, 65000, 72200, 0, 0, 0, 65000, 0x307),
    rate!(VHT20, Vht20, 78000, 86700, 0, 0, 0, 78000, 0x308),
    rate!(VHT20_LDPC_ONLY, Vht20, 86500, 96000, 0, 0, 0, 86500, 0x309),
    rate!(VHT20_LDPC_ONLY, Vht20, 97500, 108300, 0, 0, 0, 97500, 0x30a),
    rate!(VHT20_LDPC_ONLY, Vht20, 108300, 120400, 0, 0, 0, 108300, 0x30b),
    // VHT-20, 2 spatial streams (row 88)
    rate!(VHT20, Vht20, 13000, 14400, 0, 0, 0, 13000, 0x320),
    rate!(VHT20, Vht20, 26000, 28900, 0, 0, 0, 26000, 0x321),
    rate!(VHT20, Vht20, 39000, 43300, 0, 0, 0, 39000, 0x322),
    rate!(VHT20, Vht20, 52000, 57800, 0, 0, 0, 52000, 0x323),
    rate!(VHT20, Vht20, 78000, 86700, 0, 0, 0, 78000, 0x324),
    rate!(VHT20, Vht20, 104000, 115600, 0, 0, 0, 104000, 0x325),
    rate!(VHT20, Vht20, 117000, 130000, 0, 0, 0, 117000, 0x326),
    rate!(VHT20, Vht20, 130000, 144400, 0, 0, 0, 130000, 0x327),
    rate!(VHT20, Vht20, 156000, 173300, 0, 0, 0, 156000, 0x328),
    rate!(VHT20_LDPC_ONLY, Vht20, 173000, 192000, 0, 0, 0, 173000, 0x329),
    rate!(VHT20_LDPC_ONLY, Vht20, 195000, 216700, 0, 0, 0, 195000, 0x32a),
    rate!(VHT20_LDPC_ONLY, Vht20, 216700, 240700, 0, 0, 0, 216700, 0x32b),
    // VHT-20, 3 spatial streams (row 100)
    rate!(VHT20, Vht20, 19500, 21700, 0, 0, 0, 19500, 0x340),
    rate!(VHT20, Vht20, 39000, 43300, 0, 0, 0, 39000, 0x341),
    rate!(VHT20, Vht20, 58500, 65000, 0, 0, 0, 58500, 0x342),
    rate!(VHT20, Vht20, 78000, 86700, 0, 0, 0, 78000, 0x343),
    rate!(VHT20, Vht20, 117000, 130000, 0, 0, 0, 117000, 0x344),
    rate!(VHT20, Vht20, 156000, 173300, 0, 0, 0, 156000, 0x345),
    rate!(VHT20, Vht20, 175500, 195000, 0, 0, 0, 175500, 0x346),
    rate!(VHT20, Vht20, 195000, 216700, 0, 0, 0, 195000, 0x347),
    rate!(VHT20, Vht20, 234000, 260000, 0, 0, 0, 234000, 0x348),
    rate!(VHT20, Vht20, 260000, 288900, 0, 0, 0, 260000, 0x349),
    rate!(VHT20_LDPC_ONLY, Vht20, 292500, 325000, 0, 0, 0, 292500, 0x34a),
    rate!(VHT20_LDPC_ONLY, Vht20, 325000, 361100, 0, 0, 0, 325000, 0x34b),
    // VHT-20, 4 spatial streams (row 112)
    rate!(VHT20, Vht20, 26000, 28900, 0, 0, 0, 26000, 0x360),
    rate!(VHT20, Vht20, 52000, 57800, 0, 0, 0, 52000, 0x361),
    rate!(VHT20, Vht20, 78000, 86700, 0, 0, 0, 78000, 0x362),
    rate!(VHT20, Vht20, 104000, 115600, 0, 0, 0, 104000, 0x363),
    rate!(VHT20, Vht20, 156000, 173300, 0, 0, 0, 156000, 0x364),
    rate!(VHT20, Vht20, 208000, 231100, 0, 0, 0, 208000, 0x365),
    rate!(VHT20, Vht20, 234000, 260000, 0, 0, 0, 234000, 0x366),
    rate!(VHT20, Vht20, 260000, 288900, 0, 0, 0, 260000, 0x367),
    rate!(VHT20, Vht20, 312000, 346700, 0, 0, 0, 312000, 0x368),
    rate!(VHT20_LDPC_ONLY, Vht20, 344000, 378400, 0, 0, 0, 344000, 0x369),
    rate!(VHT20_LDPC_ONLY, Vht20, 390000, 433300, 0, 0, 0, 390000, 0x36a),
    rate!(VHT20_LDPC_ONLY, Vht20, 433300, 481500, 0, 0, 0, 433300, 0x36b),
    // VHT-20, 5 spatial streams (row 124)
    rate!(VHT20_LDPC_ONLY, Vht20, 32500, 36100, 0, 0, 0, 32500, 0x380),
    rate!(VHT20_LDPC_ONLY, Vht20, 65000, 72200, 0, 0, 0, 65000, 0x381),
    rate!(VHT20_LDPC_ONLY, Vht20, 97500, 108300, 0, 0, 0, 97500, 0x382),
    rate!(VHT20_LDPC_ONLY, Vht20, 130000, 144400, 0, 0, 0, 130000, 0x383),
    rate!(VHT20_LDPC_ONLY, Vht20, 195000, 216700, 0, 0, 0, 195000, 0x384),
    rate!(VHT20_LDPC_ONLY, Vht20, 260000, 288900, 0, 0, 0, 260000, 0x385),
    rate!(VHT20_LDPC_ONLY, Vht20, 292500, 325000, 0, 0, 0, 292500, 0x386),
    rate!(VHT20_LDPC_ONLY, Vht20, 325000, 361100, 0, 0, 0, 325000, 0x387),
    rate!(VHT20_LDPC_ONLY, Vht20, 390000, 433300, 0, 0, 0, 390000, 0x388),
    rate!(VHT20_LDPC_ONLY, Vht20, 433300, 481500, 0, 0, 0, 433300, 0x389),
    rate!(VHT20_LDPC_ONLY, Vht20, 487500, 541700, 0, 0, 0, 487500, 0x38a),
    rate!(VHT20_LDPC_ONLY, Vht20, 541700, 601900, 0, 0, 0, 541700, 0x38b),
    // VHT-20, 6 spatial streams (row 136)
    rate!(VHT20_LDPC_ONLY, Vht20, 39000, 43300, 0, 0, 0, 39000, 0x3a0),
    rate!(VHT20_LDPC_ONLY, Vht20, 78000, 86700, 0, 0, 0, 78000, 0x3a1),
    rate!(VHT20_LDPC_ONLY, Vht20, 117000, 130000, 0, 0, 0, 117000, 0x3a2),
    rate!(VHT20_LDPC_ONLY, Vht20, 156000, 173300, 0, 0, 0, 156000, 0x3a3),
    rate!(VHT20_LDPC_ONLY, Vht20, 234000, 260000, 0, 0, 0, 234000, 0x3a4),
    rate!(VHT20_LDPC_ONLY, Vht20, 312000, 346700, 0, 0, 0, 312000, 0x3a5),
    rate!(VHT20_LDPC_ONLY, Vht20, 351000, 390000, 0, 0, 0, 351000, 0x3a6),
    rate!(VHT20_LDPC_ONLY, Vht20, 390000, 433300, 0, 0, 0, 390000, 0x3a7),
    rate!(VHT20_LDPC_ONLY, Vht20, 468000, 520000, 0, 0, 0, 468000, 0x3a8),
    rate!(VHT20_LDPC_ONLY, Vht20, 520000, 577800, 0, 0, 0, 520000, 0x3a9),
    rate!(VHT20_LDPC_ONLY, Vht20, 585000, 650000, 0, 0, 0, 585000, 0x3aa),
    rate!(VHT20_LDPC_ONLY, Vht20, 650000, 722200, 0, 0, 0, 650000, 0x3ab),
    // VHT-20, 7 spatial streams (row 148)
    rate!(VHT20_LDPC_ONLY, Vht20, 45500, 50600, 0, 0, 0, 45500, 0x3c0),
    rate!(VHT20_LDPC_ONLY, Vht20, 91000, 101100, 0, 0, 0, 91000, 0x3c1),
    rate!(VHT20_LDPC_ONLY, Vht20, 136500, 151700, 0, 0, 0, 136500, 0x3c2),
    rate!(VHT20_LDPC_ONLY, Vht20, 182000, 202200, 0, 0, 0, 182000, 0x3c3),
    rate!(VHT20_LDPC_ONLY, Vht20, 273000, 303300, 0, 0, 0, 273000, 0x3c4),
    rate!(VHT20_LDPC_ONLY, Vht20, 364000, 404400, 0, 0, 0, 364000, 0x3c5),
    rate!(VHT20_LDPC_ONLY, Vht20, 409500, 455000, 0, 0, 0, 409500, 0x3c6),
    rate!(VHT20_LDPC_ONLY, Vht20, 455000, 505600, 0, 0, 0, 455000, 0x3c7),
    rate!(VHT20_LDPC_ONLY, Vht20, 546000, 606700, 0, 0, 0, 546000, 0x3c8),
    rate!(VHT20_LDPC_ONLY, Vht20, 606700, 674100, 0, 0, 0, 606700, 0x3c9),
    rate!(VHT20_LDPC_ONLY, Vht20, 682500, 758300, 0, 0, 0, 682500, 0x3ca),
    rate!(VHT20_LDPC_ONLY, Vht20, 758300, 842600, 0, 0, 0, 758300, 0x3cb),
    // VHT-20, 8 spatial streams (row 160)
    rate!(VHT20_LDPC_ONLY, Vht20, 52000, 57800, 0, 0, 0, 52000, 0x3e0),
    rate!(VHT20_LDPC_ONLY, Vht20, 104000, 115600, 0, 0, 0, 104000, 0x3e1),
    rate!(VHT20_LDPC_ONLY, Vht20, 156000, 173300, 0, 0, 0, 156000, 0x3e2),
    rate!(VHT20_LDPC_ONLY, Vht20, 208000, 231100, 0, 0, 0, 208000, 0x3e3),
    rate!(VHT20_LDPC_ONLY, Vht20, 312000, 346700, 0, 0, 0, 312000, 0x3e4),
    rate!(VHT20_LDPC_ONLY, Vht20, 416000, 462200, 0, 0, 0, 416000, 0x3e5),
    rate!(VHT20_LDPC_ONLY, Vht20, 468000, 520000, 0, 0, 0, 468000, 0x3e6),
    rate!(VHT20_LDPC_ONLY, Vht20, 520000, 577800, 0, 0, 0, 520000, 0x3e7),
    rate!(VHT20_LDPC_ONLY, Vht20, 624000, 693300, 0, 0, 0, 624000, 0x3e8),
    rate!(VHT20_LDPC_ONLY, Vht20, 693300, 770400, 0, 0, 0, 693300, 0x3e9),
    rate!(VHT20_LDPC_ONLY, Vht20, 780000, 866700, 0, 0, 0, 780000, 0x3ea),
    rate!(VHT20_LDPC_ONLY, Vht20, 866700, 963000, 0, 0, 0, 866700, 0x3eb),

    // VHT-40, 1 spatial stream (row 172)
    rate!(VHT40, Vht40, 13500, 15000, 0, 0, 0, 13500, 0x300),
    rate!(VHT40, Vht40, 27000, 30000, 0, 0, 0, 27000, 0x301),
    rate!(VHT40, Vht40, 40500, 45000, 0, 0, 0, 40500, 0x302),
    rate!(VHT40, Vht40, 54000, 60000, 0, 0, 0, 54000, 0x303),
    rate!(VHT40, Vht40, 81000, 90000, 0, 0, 0, 81000, 0x304),
    rate!(VHT40, Vht40, 108000, 120000, 0, 0, 0, 108000, 0x305),
    rate!(VHT40, Vht40, 121500, 135000, 0, 0, 0, 121500, 0x306),
    rate!(VHT40, Vht40, 135000, 150000, 0, 0, 0, 135000, 0x307),
    rate!(VHT40, Vht40, 162000, 180000, 0, 0, 0, 162000, 0x308),
    rate!(VHT40, Vht40, 180000, 200000, 0, 0, 0, 180000, 0x309),
    rate!(VHT40_LDPC_ONLY, Vht40, 202500, 225000, 0, 0, 0, 202500, 0x30a),
    rate!(VHT40_LDPC_ONLY, Vht40, 225000, 250000, 0, 0, 0, 225000, 0x30b),
    // VHT-40, 2 spatial streams (row 184)
    rate!(VHT40, Vht40, 27000, 30000, 0, 0, 0, 27000, 0x320),
    rate!(VHT40, Vht40, 54000, 60000, 0, 0, 0, 54000, 0x321),
    rate!(VHT40, Vht40, 81000, 90000, 0, 0, 0, 81000, 0x322),
    rate!(VHT40, Vht40, 108000, 120000, 0, 0, 0, 108000, 0x323),
    rate!(VHT40, Vht40, 162000, 180000, 0, 0, 0, 162000, 0x324),
    rate!(VHT40, Vht40, 216000, 240000, 0, 0, 0, 216000, 0x325),
    rate!(VHT40, Vht40, 243000, 270000, 0, 0, 0, 243000, 0x326),
    rate!(VHT40, Vht40, 270000, 300000, 0, 0, 0, 270000, 0x327),
    rate!(VHT40, Vht40, 324000, 360000, 0, 0, 0, 324000, 0x328),
    rate!(VHT40, Vht40, 360000, 400000, 0, 0, 0, 360000, 0x329),
    rate!(VHT40_LDPC_ONLY, Vht40, 405000, 450000, 0, 0, 0, 405000, 0x32a),
    rate!(VHT40_LDPC_ONLY, Vht40, 450000, 500000, 0, 0, 0, 450000, 0x32b),
    // VHT-40, 3 spatial streams (row 196)
    rate!(VHT40, Vht40, 40500, 45000, 0, 0, 0, 40500, 0x340),
    rate!(VHT40, Vht40, 81000, 90000, 0, 0, 0, 81000, 0x341),
    rate!(VHT40, Vht40, 121500, 135000, 0, 0, 0, 121500, 0x342),
    rate!(VHT40, Vht40, 162000, 180000, 0, 0, 0, 162000, 0x343),
    rate!(VHT40, Vht40, 243000, 270000, 0, 0, 0, 243000, 0x344),
    rate!(VHT40, Vht40, 324000, 360000, 0, 0, 0, 324000, 0x345),
    rate!(VHT40, Vht40, 364500, 405000, 0, 0, 0, 364500, 0x346),
    rate!(VHT40, Vht40, 405000, 450000, 0, 0, 0, 405000, 0x347),
    rate!(VHT40, Vht40, 486000, 540000, 0, 0, 0, 486000, 0x348),
    rate!(VHT40, Vht40, 540000, 600000, 0, 0, 0, 540000, 0x349),
    rate!(VHT40_LDPC_ONLY, Vht40, 607500, 675000, 0, 0, 0, 607500, 0x34a),
    rate!(VHT40_LDPC_ONLY, Vht40, 675000, 750000, 0, 0, 0, 675000, 0x34b),
    // VHT-40, 4 spatial streams (row 208)
    rate!(VHT40, Vht40, 54000, 60000, 0, 0, 0, 54000, 0x360),
    rate!(VHT40, Vht40, 108000, 120000, 0, 0, 0, 108000, 0x361),
    rate!(VHT40, Vht40, 162000, 180000, 0, 0, 0, 162000, 0x362),
    rate!(VHT40, Vht40, 216000, 240000, 0, 0, 0, 216000, 0x363),
    rate!(VHT40, Vht40, 324000, 260000, 0, 0, 0, 324000, 0x364),
    rate!(VHT40, Vht40, 432000, 480000, 0, 0, 0, 432000, 0x365),
    rate!(VHT40, Vht40, 486000, 540000, 0, 0, 0, 486000, 0x366),
    rate!(VHT40, Vht40, 540000, 600000, 0, 0, 0, 540000, 0x367),
    rate!(VHT40, Vht40, 648000, 720000, 0, 0, 0, 648000, 0x368),
    rate!(VHT40, Vht40, 720000, 800000, 0, 0, 0, 720000, 0x369),
    rate!(VHT40_LDPC_ONLY, Vht40, 810000, 900000, 0, 0, 0, 810000, 0x36a),
    rate!(VHT40_LDPC_ONLY, Vht40, 900000, 1000000, 0, 0, 0, 900000, 0x36b),
    // VHT-40, 5 spatial streams (row 220)
    rate!(VHT40_LDPC_ONLY, Vht40, 67500, 75000, 0, 0, 0, 67500, 0x380),
    rate!(VHT40_LDPC_ONLY, Vht40, 135000, 150000, 0, 0, 0, 135000, 0x381),
    rate!(VHT40_LDPC_ONLY, Vht40, 202500, 225000, 0, 0, 0, 202500, 0x382),
    rate!(VHT40_LDPC_ONLY, Vht40, 270000, 300000, 0, 0, 0, 270000, 0x383),
    rate!(VHT40_LDPC_ONLY, Vht40, 405000, 450000, 0, 0, 0, 405000, 0x384),
    rate!(VHT40_LDPC_ONLY, Vht40, 540000, 600000, 0, 0, 0, 540000, 0x385),
    rate!(VHT40_LDPC_ONLY, Vht40, 607500, 675000, 0, 0, 0, 607500, 0x386),
    rate!(VHT40_LDPC_ONLY, Vht40, 675000, 750000, 0, 0, 0, 675000, 0x387),
    rate!(VHT40_LDPC_ONLY, Vht40, 810000, 900000, 0, 0, 0, 810000, 0x388),
    rate!(VHT40_LDPC_ONLY, Vht40, 900000, 1000000, 0, 0, 0, 900000, 0x389),
    rate!(VHT40_LDPC_ONLY, Vht40, 1012500, 1125000, 0, 0, 0, 1012500, 0x38a),
    rate!(VHT40_LDPC_ONLY, Vht40, 1125000, 1250000, 0, 0, 0, 1125000, 0x38b),
    // VHT-40, 6 spatial streams (row 232)
    rate!(VHT40_LDPC_ONLY, Vht40, 81000, 90000, 0, 0, 0, 81000, 0x3a0),
    rate!(VHT40_LDPC_ONLY, Vht40, 162000, 180000, 0, 0, 0, 162000, 0x3a1),
    rate!(VHT40_LDPC_ONLY, Vht40, 243000, 270000, 0, 0, 0, 243000, 0x3a2),
    rate!(VHT40_LDPC_ONLY, Vht40, 324000, 360000, 0, 0, 0, 324000, 0x3a3),
    rate!(VHT40_LDPC_ONLY, Vht40, 486000, 540000, 0, 0, 0, 486000, 0x3a4),
    rate!(VHT40_LDPC_ONLY, Vht40, 648000, 720000, 0, 0, 0, 648000, 0x3a5),
    rate!(VHT40_LDPC_ONLY, Vht40, 729000, 815000, 0, 0, 0, 729000, 0x3a6),
    rate!(VHT40_LDPC_ONLY, Vht40, 810000, 900000, 0, 0, 0, 810000, 0x3a7),
    rate!(VHT40_LDPC_ONLY, Vht40, 972000, 1080000, 0, 0, 0, 972000, 0x3a8),
    rate!(VHT40_LDPC_ONLY, Vht40, 1080000, 1200000, 0, 0, 0, 1080000, 0x3a9),
    rate!(VHT40_LDPC_ONLY, Vht40, 1215000, 1350000, 0, 0, 0, 1215000, 0x3aa),
    rate!(VHT40_LDPC_ONLY, Vht40, 1350000, 1500000, 0, 0, 0, 1350000, 0x3ab),
    // VHT-40, 7 spatial streams (row 244)
    rate!(VHT40_LDPC_ONLY, Vht40, 94500, 105000, 0, 0, 0, 94500, 0x3c0),
    rate!(VHT40_LDPC_ONLY, Vht40, 189000, 210000, 0, 0, 0, 189000, 0x3c1),
    rate!(VHT40_LDPC_ONLY, Vht40, 283500, 315000, 0, 0, 0, 283500, 0x3c2),
    rate!(VHT40_LDPC_ONLY, Vht40, 378000, 420000, 0, 0, 0, 378000, 0x3c3),
    rate!(VHT40_LDPC_ONLY, Vht40, 567000, 630000, 0, 0, 0, 567000, 0x3c4),
    rate!(VHT40_LDPC_ONLY, Vht40, 756000, 840000, 0, 0, 0, 756000, 0x3c5),
    rate!(VHT40_LDPC_ONLY, Vht40, 850500, 945000, 0, 0, 0, 850500, 0x3c6),
    rate!(VHT40_LDPC_ONLY, Vht40, 945000, 1050000, 0, 0, 0, 945000, 0x3c7),
    rate!(VHT40_LDPC_ONLY, Vht40, 1134000, 1260000, 0, 0, 0, 1134000, 0x3c8),
    rate!(VHT40_LDPC_ONLY, Vht40, 1260000, 1400000, 0, 0, 0, 1260000, 0x3c9),
    rate!(VHT40_LDPC_ONLY, Vht40, 1417500, 1575000, 0, 0, 0, 1417500, 0x3ca),
    rate!(VHT40_LDPC_ONLY, Vht40, 1575000, 1750000, 0, 0, 0, 1575000, 0x3cb),
    // VHT-40, 8 spatial streams (row 256)
    rate!(VHT40_LDPC_ONLY, Vht40, 108000, 120000, 0, 0, 0, 108000, 0x3e0),
    rate!(VHT40_LDPC_ONLY, Vht40, 216000, 240000, 0, 0, 0, 216000, 0x3e1),
    rate!(VHT40_LDPC_ONLY, Vht40, 324000, 360000, 0, 0, 0, 324000, 0x3e2),
    rate!(VHT40_LDPC_ONLY, Vht40, 432000, 480000, 0, 0, 0, 432000, 0x3e3),
    rate!(VHT40_LDPC_ONLY, Vht40, 648000, 720000, 0, 0, 0, 648000, 0x3e4),
    rate!(VHT40_LDPC_ONLY, Vht40, 864000, 960000, 0, 0, 0, 864000, 0x3e5),
    rate!(VHT40_LDPC_ONLY, Vht40, 972000, 1080000, 0, 0, 0, 972000, 0x3e6),
    rate!(VHT40_LDPC_ONLY, Vht40, 1080000, 1200000, 0, 0, 0, 1080000, 0x3e7),
    rate!(VHT40_LDPC_ONLY, Vht40, 1296000, 1440000, 0, 0, 0, 1296000, 0x3e8),
    rate!(VHT40_LDPC_ONLY, Vht40, 1440000, 1600000, 0, 0, 0, 1440000, 0x3e9),
    rate!(VHT40_LDPC_ONLY, Vht40, 1620000, 1800000, 0, 0, 0, 1620000, 0x3ea),
    rate!(VHT40_LDPC_ONLY, Vht40, 1800000, 2000000, 0, 0, 0, 1800000, 0x3eb),

    // VHT-80, 1 spatial stream (row 268)
    rate!(VHT80, Vht80, 29300, 32500, 0, 0, 0, 29300, 0x300),
    rate!(VHT80, Vht80, 58500, 65000, 0, 0, 0, 58500, 0x301),
    rate!(VHT80, Vht80, 87800, 97500, 0, 0, 0, 87800, 0x302),
    rate!(VHT80, Vht80, 117000, 130000, 0, 0, 0, 117000, 0x303),
    rate!(VHT80, Vht80, 175500, 195000, 0, 0, 0, 175500, 0x304),
    rate!(VHT80, Vht80, 234000, 260000, 0, 0, 0, 234000, 0x305),
    rate!(VHT80, Vht80, 263300, 292500, 0, 0, 0, 263300, 0x306),
    rate!(VHT80, Vht80, 292500, 325000, 0, 0, 0, 292500, 0x307),
    rate!(VHT80, Vht80, 351000, 390000, 0, 0, 0, 351000, 0x308),
    rate!(VHT80, Vht80, 390000, 433300, 0, 0, 0, 390000, 0x309),
    rate!(VHT80_LDPC_ONLY, Vht80, 438800, 487500, 0, 0, 0, 438800, 0x30a),
    rate!(VHT80_LDPC_ONLY, Vht80, 487500, 541700, 0, 0, 0, 487500, 0x30b),
    // VHT-80, 2 spatial streams (row 280)
    rate!(VHT80, Vht80, 58500, 65000, 0, 0, 0, 58500, 0x320),
    rate!(VHT80, Vht80, 117000, 130000, 0, 0, 0, 117000, 0x321),
    rate!(VHT80, Vht80, 175500, 195000, 0, 0, 0, 175500, 0x322),
    rate!(VHT80, Vht80, 234000, 260000, 0, 0, 0, 234000, 0x323),
    rate!(VHT80, Vht80, 351000, 390000, 0, 0, 0, 351000, 0x324),
    rate!(VHT80, Vht80, 468000, 520000, 0, 0, 0, 468000, 0x325),
    rate!(VHT80, Vht80, 526500, 585000, 0, 0, 0, 526500, 0x326),
    rate!(VHT80, Vht80, 585000, 650000, 0, 0, 0, 585000, 0x327),
    rate!(VHT80, Vht80, 702000, 780000, 0, 0, 0, 702000, 0x328),
    rate!(VHT80, Vht80, 780000, 866700, 0, 0, 0, 780000, 0x329),
    rate!(VHT80_LDPC_ONLY, Vht80, 877500, 975000, 0, 0, 0, 877500, 0x32a),
    rate!(VHT80_LDPC_ONLY, Vht80, 975000, 1083300, 0, 0, 0, 975000, 0x32b),
    // VHT-80, 3 spatial streams (row 292)
    rate!(VHT80, Vht80, 87800, 97500, 0, 0, 0, 87800, 0x340),
    rate!(VHT80, Vht80, 175500, 195000, 0, 0, 0, 175500, 0x341),
    rate!(VHT80, Vht80, 263300, 292500, 0, 0, 0, 263300, 0x342),
    rate!(VHT80, Vht80, 351000, 390000, 0, 0, 0, 351000, 0x343),
    rate!(VHT80, Vht80, 526500, 585000, 0, 0, 0, 526500, 0x344),
    rate!(VHT80, Vht80, 702000, 780000, 0, 0, 0, 702000, 0x345),
    // 802.11ac excludes VHT-80 MCS 6 at 3 spatial streams.
    rate!(INVALID, Vht80, 789800, 877500, 0, 0, 0, 789800, 0x346),
    rate!(VHT80, Vht80, 877500, 975000, 0, 0, 0, 877500, 0x347),
    rate!(VHT80, Vht80, 1053000, 1170000, 0, 0, 0, 1053000, 0x348),
    rate!(VHT80, Vht80, 1170000, 1300000, 0, 0, 0, 1170000, 0x349),
    rate!(VHT80_LDPC_ONLY, Vht80, 1316300, 1462500, 0, 0, 0, 1316300, 0x34a),
    rate!(VHT80_LDPC_ONLY, Vht80, 1462500, 1625000, 0, 0, 0, 1462500, 0x34b),
    // VHT-80, 4 spatial streams (row 304)
    rate!(VHT80, Vht80, 117000, 130000, 0, 0, 0, 117000, 0x360),
    rate!(VHT80, Vht80, 234000, 260000, 0, 0, 0, 234000, 0x361),
    rate!(VHT80, Vht80, 351000, 390000, 0, 0, 0, 351000, 0x362),
    rate!(VHT80, Vht80, 468000, 520000, 0, 0, 0, 468000, 0x363),
    rate!(VHT80, Vht80, 702000, 780000, 0, 0, 0, 702000, 0x364),
    rate!(VHT80, Vht80, 936000, 1040000, 0, 0, 0, 936000, 0x365),
    rate!(VHT80, Vht80, 1053000, 1170000, 0, 0, 0, 1053000, 0x366),
    rate!(VHT80, Vht80, 1170000, 1300000, 0, 0, 0, 1170000, 0x367),
    rate!(VHT80, Vht80, 1404000, 1560000, 0, 0, 0, 1404000, 0x368),
    rate!(VHT80, Vht80, 1560000, 1733000, 0, 0, 0, 1560000, 0x369),
    rate!(VHT80_LDPC_ONLY, Vht80, 1755000, 1950000, 0, 0, 0, 1755000, 0x36a),
    rate!(VHT80_LDPC_ONLY, Vht80, 1950000, 2166700, 0, 0, 0, 1950000, 0x36b),
    // VHT-80, 5 spatial streams (row 316)
    rate!(VHT80_LDPC_ONLY, Vht80, 146300, 162500, 0, 0, 0, 146300, 0x380),
    rate!(VHT80_LDPC_ONLY, Vht80, 292500, 325000, 0, 0, 0, 292500, 0x381),
    rate!(VHT80_LDPC_ONLY, Vht80, 438800, 487500, 0, 0, 0, 438800, 0x382),
    rate!(VHT80_LDPC_ONLY, Vht80, 585000, 650000, 0, 0, 0, 585000, 0x383),
    rate!(VHT80_LDPC_ONLY, Vht80, 877500, 975000, 0, 0, 0, 877500, 0x384),
    rate!(VHT80_LDPC_ONLY, Vht80, 1170000, 1300000, 0, 0, 0, 1170000, 0x385),
    rate!(VHT80_LDPC_ONLY, Vht80, 1316300, 1462500, 0, 0, 0, 1316300, 0x386),
    rate!(VHT80_LDPC_ONLY, Vht80, 1462500, 1625000, 0, 0, 0, 1462500, 0x387),
    rate!(VHT80_LDPC_ONLY, Vht80, 1755000, 1950000, 0, 0, 0, 1755000, 0x388),
    rate!(VHT80_LDPC_ONLY, Vht80, 1950000, 2166700, 0, 0, 0, 1950000, 0x389),
    rate!(VHT80_LDPC_ONLY, Vht80, 2193800, 2437500, 0, 0, 0, 2193800, 0x38a),
    rate!(VHT80_LDPC_ONLY, Vht80, 2437500, 2708300, 0, 0, 0, 2437500, 0x38b),
    // VHT-80, 6 spatial streams (row 328)
    rate!(VHT80_LDPC_ONLY, Vht80, 175500, 195000, 0, 0, 0, 175500, 0x3a0),
    rate!(VHT80_LDPC_ONLY, Vht80, 351000, 390000, 0, 0, 0, 351000, 0x3a1),
    rate!(VHT80_LDPC_ONLY, Vht80, 526500, 585500, 0, 0, 0, 526500, 0x3a2),
    rate!(VHT80_LDPC_ONLY, Vht80, 702000, 780000, 0, 0, 0, 702000, 0x3a3),
    rate!(VHT80_LDPC_ONLY, Vht80, 1053000, 1170000, 0, 0, 0, 1053000, 0x3a4),
    rate!(VHT80_LDPC_ONLY, Vht80, 1404000, 1560000, 0, 0, 0, 1404000, 0x3a5),
    rate!(VHT80_LDPC_ONLY, Vht80, 1579500, 1755000, 0, 0, 0, 1579500, 0x3a6),
    rate!(VHT80_LDPC_ONLY, Vht80, 1755000, 1950000, 0, 0, 0, 1755000, 0x3a7),
    rate!(VHT80_LDPC_ONLY, Vht80, 2106000, 2340000, 0, 0, 0, 2106000, 0x3a8),
    rate!(VHT80_LDPC_ONLY, Vht80, 2340000, 2600000, 0, 0, 0, 2340000, 0x3a9),
    rate!(VHT80_LDPC_ONLY, Vht80, 2632500, 2925000, 0, 0, 0, 2632500, 0x3aa),
    rate!(VHT80_LDPC_ONLY, Vht80, 2925000, 3250000, 0, 0, 0, 2925000, 0x3ab),
    // VHT-80, 7 spatial streams (row 340)
    rate!(VHT80_LDPC_ONLY, Vht80, 204800, 227500, 0, 0, 0, 204800, 0x3c0),
    rate!(VHT80_LDPC_ONLY, Vht80, 409500, 455000, 0, 0, 0, 409500, 0x3c1),
    rate!(VHT80_LDPC_ONLY, Vht80, 614300, 682500, 0, 0, 0, 614300, 0x3c2),
    rate!(VHT80_LDPC_ONLY, Vht80, 819000, 910000, 0, 0, 0, 819000, 0x3c3),
    rate!(VHT80_LDPC_ONLY, Vht80, 1288500, 1365000, 0, 0, 0, 1288500, 0x3c4),
    rate!(VHT80_LDPC_ONLY, Vht80, 1638000, 1820000, 0, 0, 0, 1638000, 0x3c5),
    rate!(VHT80_LDPC_ONLY, Vht80, 1842800, 2047500, 0, 0, 0, 1842800, 0x3c6),
    rate!(VHT80_LDPC_ONLY, Vht80, 2047500, 2275000, 0, 0, 0, 2047500, 0x3c7),
    rate!(VHT80_LDPC_ONLY, Vht80, 2457000, 2730000, 0, 0, 0, 2457000, 0x3c8),
    rate!(VHT80_LDPC_ONLY, Vht80, 2730000, 3033300, 0, 0, 0, 2730000, 0x3c9),
    rate!(VHT80_LDPC_ONLY, Vht80, 3071300, 3412500, 0, 0, 0, 3071300, 0x3ca),
    rate!(VHT80_LDPC_ONLY, Vht80, 3412500, 3791700, 0, 0, 0, 3412500, 0x3cb),
    // VHT-80, 8 spatial streams (row 352)
    rate!(VHT80_LDPC_ONLY, Vht80, 234000, 260000, 0, 0, 0, 234000, 0x3e0),
    rate!(VHT80_LDPC_ONLY, Vht80, 468000, 520000, 0, 0, 0, 468000, 0x3e1),
    rate!(VHT80_LDPC_ONLY, Vht80, 702000, 780000, 0, 0, 0, 702000, 0x3e2),
    rate!(VHT80_LDPC_ONLY, Vht80, 936000, 1040000, 0, 0, 0, 936000, 0x3e3),
    rate!(VHT80_LDPC_ONLY, Vht80, 1404000, 1560000, 0, 0, 0, 1404000, 0x3e4),
    rate!(VHT80_LDPC_ONLY, Vht80, 1872000, 2080000, 0, 0, 0, 1872000, 0x3e5),
    rate!(VHT80_LDPC_ONLY, Vht80, 2106000, 2340000, 0, 0, 0, 2106000, 0x3e6),
    rate!(VHT80_LDPC_ONLY, Vht80, 2340000, 2600000, 0, 0, 0, 2340000, 0x3e7),
    rate!(VHT80_LDPC_ONLY, Vht80, 2808000, 3120000, 0, 0, 0, 2808000, 0x3e8),
    rate!(VHT80_LDPC_ONLY, Vht80, 3120000, 3466700, 0, 0, 0, 3120000, 0x3e9),
    rate!(VHT80_LDPC_ONLY, Vht80, 3510000, 3900000, 0, 0, 0, 3510000, 0x3ea),
    rate!(VHT80_LDPC_ONLY, Vht80, 3900000, 4333300, 0, 0, 0, 3900000, 0x3eb),

    // VHT-160, 1 spatial stream (row 364)
    rate!(VHT160, Vht160, 58500, 65000, 0, 0, 0, 58500, 0x300),
    rate!(VHT160, Vht160, 117000, 130000, 0, 0, 0, 117000, 0x301),
    rate!(VHT160, Vht160, 175500, 195000, 0, 0, 0, 175500, 0x302),
    rate!(VHT160, Vht160, 234000, 260000, 0, 0, 0, 234000, 0x303),
    rate!(VHT160, Vht160, 351000, 390000, 0, 0, 0, 351000, 0x304),
    rate!(VHT160, Vht160, 468000, 520000, 0, 0, 0, 468000, 0x305),
    rate!(VHT160, Vht160, 526500, 585000, 0, 0, 0, 526500, 0x306),
    rate!(VHT160, Vht160, 585000, 650000, 0, 0, 0, 585000, 0x307),
    rate!(VHT160, Vht160, 702000, 780000, 0, 0, 0, 702000, 0x308),
    rate!(VHT160, Vht160, 780000, 866700, 0, 0, 0, 780000, 0x309),
    rate!(VHT160_LDPC_ONLY, Vht160, 877500, 975000, 0, 0, 0, 877500, 0x30a),
    rate!(VHT160_LDPC_ONLY, Vht160, 975000, 1083300, 0, 0, 0, 975000, 0x30b),
    // VHT-160, 2 spatial streams (row 376)
    rate!(VHT160, Vht160, 117000, 130000, 0, 0, 0, 117000, 0x320),
    rate!(VHT160, Vht160, 234000, 260000, 0, 0, 0, 234000, 0x321),
    rate!(VHT160, Vht160, 351000, 390000, 0, 0, 0, 351000, 0x322),
    rate!(VHT160, Vht160, 468000, 520000, 0, 0, 0, 468000, 0x323),
    rate!(VHT160, Vht160, 702000, 780000, 0, 0, 0, 702000, 0x324),
    rate!(VHT160, Vht160, 936000, 1040000, 0, 0, 0, 936000, 0x325),
    rate!(VHT160, Vht160, 1053000, 1170000, 0, 0, 0, 1053000, 0x326),
    rate!(VHT160, Vht160, 1170000, 1300000, 0, 0, 0, 1170000, 0x327),
    rate!(VHT160, Vht160, 1404000, 1560000, 0, 0, 0, 1404000, 0x328),
    rate!(VHT160, Vht160, 1560000, 1733300, 0, 0, 0, 1560000, 0x329),
    rate!(VHT160_LDPC_ONLY, Vht160, 1755000, 1950000, 0, 0, 0, 1755000, 0x32a),
    rate!(VHT160_LDPC_ONLY, Vht160, 1950000, 2166700, 0, 0, 0, 1950000, 0x32b),
    // VHT-160, 3 spatial streams (row 388)
    rate!(VHT160, Vht160, 175500, 195000, 0, 0, 0, 175500, 0x340),
    rate!(VHT160, Vht160, 351000, 390000, 0, 0, 0, 351000, 0x341),
    rate!(VHT160, Vht160, 526500, 585000, 0, 0, 0, 526500, 0x342),
    rate!(VHT160, Vht160, 702000, 780000, 0, 0, 0, 702000, 0x343),
    rate!(VHT160, Vht160, 1053000, 1170000, 0, 0, 0, 1053000, 0x344),
    rate!(VHT160, Vht160, 1404000, 1560000, 0, 0, 0, 1404000, 0x345),
    rate!(VHT160, Vht160, 1579500, 1755000, 0, 0, 0, 1579500, 0x346),
    rate!(VHT160, Vht160, 1755000, 1755000, 0, 0, 0, 1755000, 0x347),
    rate!(VHT160, Vht160, 2106000, 2340000, 0, 0, 0, 2106000, 0x348),
    rate!(VHT160, Vht160, 2340000, 2600000, 0, 0, 0, 2340000, 0x349),
    rate!(VHT160_LDPC_ONLY, Vht160, 2632500, 2925000, 0, 0, 0, 2632500, 0x34a),
    rate!(VHT160_LDPC_ONLY, Vht160, 2925000, 3250000, 0, 0, 0, 2925000, 0x34b),
    // VHT-160, 4 spatial streams (row 400)
    rate!(VHT160, Vht160, 234000, 260000, 0, 0, 0, 234000, 0x360),
    rate!(VHT160, Vht160, 468000, 520000, 0, 0, 0, 468000, 0x361),
    rate!(VHT160, Vht160, 702000, 780000, 0, 0, 0, 702000, 0x362),
    rate!(VHT160, Vht160, 936000, 1040000, 0, 0, 0, 936000, 0x363),
    rate!(VHT160, Vht160, 1404000, 1560000, 0, 0, 0, 1404000, 0x364),
    rate!(VHT160, Vht160, 1872000, 2080000, 0, 0, 0, 1872000, 0x365),
    rate!(VHT160, Vht160, 2106000, 2340000, 0, 0, 0, 2106000, 0x366),
    rate!(VHT160, Vht160, 2340000, 2600000, 0, 0, 0, 2340000, 0x367),
    rate!(VHT160, Vht160, 2808000, 3120000, 0, 0, 0, 2808000, 0x368),
    rate!(VHT160_LDPC_ONLY, Vht160, 3120000, 3466700, 0, 0, 0, 3120000, 0x369),
    rate!(VHT160_LDPC_ONLY, Vht160, 3510000, 3900000, 0, 0, 0, 3510000, 0x36a),
    rate!(VHT160_LDPC_ONLY, Vht160, 3900000, 4333300, 0, 0, 0, 3900000, 0x36b),

    // HE-20, 1 spatial stream (row 412)
    rate!(HE20, He20, 8600, 8900, 8100, 7300, 4300, 8600, 0x400),
    rate!(HE20, He20, 17200, 17700, 16300, 14600, 8600, 17200, 0x401),
    rate!(HE20, He20, 25800, 26600, 24400, 21900, 0, 25800, 0x402),
    rate!(HE20, He20, 34400, 35500, 32500, 29300, 17700, 34400, 0x403),
    rate!(HE20, He20, 51600, 53200, 48800, 43900, 25800, 51600, 0x404),
    rate!(HE20, He20, 68800, 70900, 65000, 58500, 0, 68800, 0x405),
    rate!(HE20, He20, 77400, 79800, 73100, 65800, 0, 77400, 0x406),
    rate!(HE20, He20, 86000, 88600, 81300, 73100, 0, 86000, 0x407),
    rate!(HE20, He20, 103200, 106400, 97500, 87800, 0, 103200, 0x408),
    rate!(HE20, He20, 114700, 118200, 108300, 97500, 0, 114700, 0x409),
    rate!(HE20_LDPC_ONLY, He20, 129000, 133000, 121900, 109700, 0, 129000, 0x40a),
    rate!(HE20_LDPC_ONLY, He20, 143400, 147700, 135400, 121900, 0, 143400, 0x40b),
    rate!(HE20_LDPC_ONLY, He20, 154900, 159500, 146300, 131600, 0, 154900, 0x40c),
    rate!(HE20_LDPC_ONLY, He20, 172100, 177300, 162500, 146300, 0, 172100, 0x40d),
    // HE-20, 2 spatial streams (row 426)
    rate!(HE20, He20, 17200, 17700, 16300, 14600, 8600, 17200, 0x420),
    rate!(HE20, He20, 34400, 35500, 32500, 29300, 17700, 34400, 0x421),
    rate!(HE20, He20, 51600, 53200, 48800, 43900, 0, 51600, 0x422),
    rate!(HE20, He20, 68800, 70900, 65000, 58500, 34400, 68800, 0x423),
    rate!(HE20, He20, 103200, 106400, 97500, 87800, 51600, 103200, 0x424),
    rate!(HE20, He20, 137600, 141800, 130000, 117000, 0, 137600, 0x425),
    rate!(HE20, He20, 154900, 159500, 146300, 131600, 0, 154900, 0x426),
    rate!(HE20, He20, 172100, 177300, 162500, 146300, 0, 172100, 0x427),
    rate!(HE20, He20, 206500, 212700, 195000, 175500, 0, 206500, 0x428),
    rate!(HE20, He20, 229400, 236400, 216700, 195000, 0, 229400, 0x429),
    rate!(HE20_LDPC_ONLY, He20, 258100, 265900, 243800, 219400, 0, 258100, 0x42a),
    rate!(HE20_LDPC_ONLY, He20, 286800, 295500, 270800, 243800, 0, 286800, 0x42b),
    rate!(HE20_LDPC_ONLY, He20, 309700, 319100, 292500, 263300, 0, 309700, 0x42c),
    rate!(HE20_LDPC_ONLY, He20, 344100, 354500, 325000, 292500, 0, 344100, 0x42d),
    // HE-20, 3 spatial streams (row 440)
    rate!(HE20, He20, 25800, 26600, 24400, 21900, 12900, 25800, 0x440),
    rate!(HE20, He20, 51600, 53200, 48800, 43900, 25800, 51600, 0x441),
    rate!(HE20, He20, 77400, 79800, 73100, 65800, 0, 77400, 0x442),
    rate!(HE20, He20, 103200, 106400, 97500, 87800, 51600, 103200, 0x443),
    rate!(HE20, He20, 154900, 159500, 146300, 131600, 77400, 154900, 0x444),
    rate!(HE20, He20, 206500, 212700, 195000, 175500, 0, 206500, 0x445),
    rate!(HE20, He20, 232300, 239300, 219400, 197400, 0, 232300, 0x446),
    rate!(HE20, He20, 258100, 265900, 243800, 219400, 0, 258100, 0x447),
    rate!(HE20, He20, 309700, 319100, 292500, 263300, 0, 309700, 0x448),
    rate!(HE20, He20, 344100, 354500, 325000, 292500, 0, 344100, 0x449),
    rate!(HE20_LDPC_ONLY, He20, 387100, 398900, 365600, 329100, 0, 387100, 0x44a),
    rate!(HE20_LDPC_ONLY, He20, 430100, 443200, 406300, 365600, 0, 430100, 0x44b),
    rate!(HE20_LDPC_ONLY, He20, 464600, 478600, 438800, 394900, 0, 464600, 0x44c),
    rate!(HE20_LDPC_ONLY, He20, 516200, 531800, 487500, 438800, 0, 516200, 0x44d),
    // HE-20, 4 spatial streams (row 454)
    rate!(HE20, He20, 34400, 35500, 32500, 29300, 17700, 34400, 0x460),
    rate!(HE20, He20, 68800, 70900, 65000, 58500, 34400, 68800, 0x461),
    rate!(HE20, He20, 103200, 106400, 97500, 87800, 0, 103200, 0x462),
    rate!(HE20, He20, 137600, 141800, 130000, 117000, 68800, 137600, 0x463),
    rate!(HE20, He20, 206500, 212700, 195000, 175500, 103200, 206500, 0x464),
    rate!(HE20, He20, 275300, 283600, 260000, 234000, 0, 275300, 0x465),
    rate!(HE20, He20, 309700, 319100, 292500, 263300, 0, 309700, 0x466),
    rate!(HE20, He20, 344100, 354500, 325000, 292500, 0, 344100, 0x467),
    rate!(HE20, He20, 412900, 425500, 390000, 351000, 0, 412900, 0x468),
    rate!(HE20, He20, 455800, 472700, 433300, 390000, 0, 455800, 0x469),
    rate!(HE20_LDPC_ONLY, He20, 516200, 531800, 487500, 438800, 0, 516200, 0x46a),
    rate!(HE20_LDPC_ONLY, He20, 573500, 590900, 541700, 487500, 0, 573500, 0x46b),
    rate!(HE20_LDPC_ONLY, He20, 619400, 638200, 585000, 526500, 0, 619400, 0x46c),
    rate!(HE20_LDPC_ONLY, He20, 688200, 709100, 650000, 585000, 0, 688200, 0x46d),
    // HE-20, 5 spatial streams (row 468)
    rate!(HE20_LDPC_ONLY, He20, 43000, 43300, 40600, 36600, 21500, 43000, 0x480),
    rate!(HE20_LDPC_ONLY, He20, 86000, 88600, 81300, 73100, 43000, 86000, 0x481),
    rate!(HE20_LDPC_ONLY, He20, 129000, 133000, 121900, 109700, 0, 129000, 0x482),
    rate!(HE20_LDPC_ONLY, He20, 172100, 177300, 162500, 146300, 86000, 172100, 0x483),
    rate!(HE20_LDPC_ONLY, He20, 258100, 265900, 243800, 219400, 129000, 258100, 0x484),
    rate!(HE20_LDPC_ONLY, He20, 344100, 354500, 325000, 292500, 0, 344100, 0x485),
    rate!(HE20_LDPC_ONLY, He20, 387100, 398900, 365600, 329100, 0, 387100, 0x486),
    rate!(HE20_LDPC_ONLY, He20, 430100, 443200, 406300, 365600, 0, 430100, 0x487),
    rate!(HE20_LDPC_ONLY, He20, 516200, 531800, 487500, 438800, 0, 516200, 0x488),
    rate!(HE20_LDPC_ONLY, He20, 573500, 590900, 541700, 487500, 0, 573500, 0x489),
    rate!(HE20_LDPC_ONLY, He20, 645200, 664800, 609400, 548400, 0, 645200, 0x48a),
    rate!(HE20_LDPC_ONLY, He20, 716900, 738600, 677100, 609400, 0, 716900, 0x48b),
    rate!(HE20_LDPC_ONLY, He20, 774300, 797700, 731300, 658100, 0, 774300, 0x48c),
    rate!(HE20_LDPC_ONLY, He20, 860300, 886400, 812500, 731300, 0, 860300, 0x48d),
    // HE-20, 6 spatial streams (row 482)
    rate!(HE20_LDPC_ONLY, He20, 51600, 53200, 48800, 43900, 25800, 51600, 0x4a0),
    rate!(HE20_LDPC_ONLY, He20, 103200, 106400, 97500, 87800, 51600, 103200, 0x4a1),
    rate!(HE20_LDPC_ONLY, He20, 154900, 159500, 146300, 131600, 0, 154900, 0x4a2),
    rate!(HE20_LDPC_ONLY, He20, 206500, 212700, 195000, 175500, 103200, 206500, 0x4a3),
    rate!(HE20_LDPC_ONLY, He20, 309700, 319100, 292500, 263300, 154900, 309700, 0x4a4),
    rate!(HE20_LDPC_ONLY, He20, 412900, 425500, 390000, 351000, 0, 412900, 0x4a5),
    rate!(HE20_LDPC_ONLY, He20, 464600, 478600, 438000, 394900, 0, 464600, 0x4a6),
    rate!(HE20_LDPC_ONLY, He20, 516200, 531800, 487500, 438800, 0, 516200, 0x4a7),
    rate!(HE20_LDPC_ONLY, He20, 619400, 638200, 585000, 526500, 0, 619400, 0x4a8),
    rate!(HE20_LDPC_ONLY, He20, 688200, 709100, 650000, 585000, 0, 688200, 0x4a9),
    rate!(HE20_LDPC_ONLY, He20, 774300, 797700, 731300, 658100, 0, 774300, 0x4aa),
    rate!(HE20_LDPC_ONLY, He20, 860300, 886400, 812500, 731300, 0, 860300, 0x4ab),
    rate!(HE20_LDPC_ONLY, He20, 929100, 957300, 877500, 789800, 0, 929100, 0x4ac),
    rate!(HE20_LDPC_ONLY, He20, 1032400, 1063600, 975000, 877500, 0, 1032400, 0x4ad),
    // HE-20, 7 spatial streams (row 496)
    rate!(HE20_LDPC_ONLY, He20, 60200, 62000, 56900, 51200, 30100, 60200, 0x4c0),
    rate!(HE20_LDPC_ONLY, He20, 120400, 124100, 113800, 102400, 60200, 120400, 0x4c1),
    rate!(HE20_LDPC_ONLY, He20, 180700, 186100, 170600, 153600, 0, 180700, 0x4c2),
    rate!(HE20_LDPC_ONLY, He20, 240900, 248200, 227500, 204800, 120400, 240900, 0x4c3),
    rate!(HE20_LDPC_ONLY, He20, 361300, 372300, 341300, 307100, 180700, 361300, 0x4c4),
    rate!(HE20_LDPC_ONLY, He20, 481800, 496400, 455000, 409500, 0, 481800, 0x4c5),
    rate!(HE20_LDPC_ONLY, He20, 542000, 558400, 511900, 460700, 0, 542000, 0x4c6),
    rate!(HE20_LDPC_ONLY, He20, 602200, 620500, 568800, 511900, 0, 602200, 0x4c7),
    rate!(HE20_LDPC_ONLY, He20, 722600, 744500, 682500, 614300, 0, 722600, 0x4c8),
    rate!(HE20_LDPC_ONLY, He20, 802900, 827300, 758300, 682500, 0, 802900, 0x4c9),
    rate!(HE20_LDPC_ONLY, He20, 903300, 930700, 853100, 767800, 0, 903300, 0x4ca),
    rate!(HE20_LDPC_ONLY, He20, 1003700, 1034100, 947900, 853100, 0, 1003700, 0x4cb),
    rate!(HE20_LDPC_ONLY, He20, 1084000, 1116800, 1023800, 921400, 0, 1084000, 0x4cc),
    rate!(HE20_LDPC_ONLY, He20, 1204400, 1240900, 1137500, 1023800, 0, 1204400, 0x4cd),
    // HE-20, 8 spatial streams (row 510)
    rate!(HE20_LDPC_ONLY, He20, 68800, 70900, 65000, 58500, 34400, 68800, 0x4e0),
    rate!(HE20_LDPC_ONLY, He20, 137600, 141800, 130000, 117000, 68800, 137600, 0x4e1),
    rate!(HE20_LDPC_ONLY, He20, 206500, 212700, 195000, 175500, 0, 206500, 0x4e2),
    rate!(HE20_LDPC_ONLY, He20, 275300, 283600, 260000, 234000, 137600, 275300, 0x4e3),
    rate!(HE20_LDPC_ONLY, He20, 412900, 425500, 390000, 351000, 206500, 412900, 0x4e4),
    rate!(HE20_LDPC_ONLY, He20, 550600, 567300, 520000, 468000, 0, 550600, 0x4e5),
    rate!(HE20_LDPC_ONLY, He20, 619400, 638200, 585000, 526500, 0, 619400, 0x4e6),
    rate!(HE20_LDPC_ONLY, He20, 688200, 709100, 650000, 585000, 0, 688200, 0x4e7),
    rate!(HE20_LDPC_ONLY, He20, 825900, 850900, 780000, 702000, 0, 825900, 0x4e8),
    rate!(HE20_LDPC_ONLY, He20, 917600, 945500, 866700, 780000, 0, 917600, 0x4e9),
    rate!(HE20_LDPC_ONLY, He20, 1032400, 1063600, 975000, 877500, 0, 1032400, 0x4ea),
    rate!(HE20_LDPC_ONLY, He20, 1147100, 1181800, 1083300, 975000, 0, 1147100, 0x4eb),
    rate!(HE20_LDPC_ONLY, He20, 1238800, 1276400, 1170000, 1053000, 0, 1238800, 0x4ec),
    rate!(HE20_LDPC_ONLY, He20, 1376500, 1418200, 1300000, 1170000, 0, 1376500, 0x4ed),

    // HE-40, 1 spatial stream (row 524)
    rate!(HE40_LDPC_ONLY, He40, 17200, 17700, 16300, 14600, 8600, 17200, 0x400),
    rate!(HE40_LDPC_ONLY, He40, 34400, 35500, 32500, 29300, 17700, 34400, 0x401),
    rate!(HE40_LDPC_ONLY, He40, 51600, 53200, 48800, 43900, 25800, 51600, 0x402),
    rate!(HE40_LDPC_ONLY, He40, 68800, 70900, 65000, 58500, 0, 68800, 0x403),
    rate!(HE40_LDPC_ONLY, He40, 103200, 106400, 97500, 87800, 0, 103200, 0x404),
    rate!(HE40_LDPC_ONLY, He40, 137600, 141800, 130000, 117000, 0, 137600, 0x405),
    rate!(HE40_LDPC_ONLY, He40, 154900, 159500, 146300, 131600, 0, 154900, 0x406),
    rate!(HE40_LDPC_ONLY, He40, 172100, 177300, 162500, 146300, 0, 172100, 0x407),
    rate!(HE40_LDPC_ONLY, He40, 206500, 212700, 195000, 175500, 0, 206500, 0x408),
    rate!(HE40_LDPC_ONLY, He40, 229400, 236400, 216700, 195000, 0, 229400, 0x409),
    rate!(HE40_LDPC_ONLY, He40, 258100, 265900, 243800, 219400, 0, 258100, 0x40a),
    rate!(HE40_LDPC_ONLY, He40, 286800, 295500, 270800, 243800, 0, 286800, 0x40b),
    rate!(HE40_LDPC_ONLY, He40, 309700, 319100, 292500, 263300, 0, 309700, 0x40c),
    rate!(HE40_LDPC_ONLY, He40, 344100, 354500, 325000, 292500, 0, 344100, 0x40d),
    // HE-40, 2 spatial streams (row 538)
    rate!(HE40_LDPC_ONLY, He40, 34400, 35500, 32500, 29300, 17700, 34400, 0x420),
    rate!(HE40_LDPC_ONLY, He40, 68800, 70900, 65000, 58500, 34400, 68800, 0x421),
    rate!(HE40_LDPC_ONLY, He40, 103200, 106400, 97500, 87800, 0, 103200, 0x422),
    rate!(HE40_LDPC_ONLY, He40, 137600, 141800, 130000, 117000, 68800, 137600, 0x423),
    rate!(HE40_LDPC_ONLY, He40, 206500, 212700, 195000, 175500, 103200, 206500, 0x424),
    rate!(HE40_LDPC_ONLY, He40, 275300, 283600, 260000, 234000, 0, 275300, 0x425),
    rate!(HE40_LDPC_ONLY, He40, 309700, 319100, 292500, 263300, 0, 309700, 0x426),
    rate!(HE40_LDPC_ONLY, He40, 344100, 354500, 325000, 292500, 0, 344100, 0x427),
    rate!(HE40_LDPC_ONLY, He40, 412900, 425500, 390000, 351000, 0, 412900, 0x428),
    rate!(HE40_LDPC_ONLY, He40, 455800, 472700, 433300, 390000, 0, 455800, 0x429),
    rate!(HE40_LDPC_ONLY, He40, 516200, 531800, 487500, 438800, 0, 516200, 0x42a),
    rate!(HE40_LDPC_ONLY, He40, 573500, 590900, 541700, 487500, 0, 573500, 0x42b),
    rate!(HE40_LDPC_ONLY, He40, 619400, 638200, 585000, 526500, 0, 619400, 0x42c),
    rate!(HE40_LDPC_ONLY, He40, 688200, 709100, 650000, 585000, 0, 688200, 0x42d),
    // HE-40, 3 spatial streams (row 552)
    rate!(HE40_LDPC_ONLY, He40, 51600, 53200, 48800, 43900, 25800, 51600, 0x440),
    rate!(HE40_LDPC_ONLY, He40, 103200, 106400, 97500, 87800, 51600, 103200, 0x441),
    rate!(HE40_LDPC_ONLY, He40, 154900, 159500, 146300, 131600, 0, 154900, 0x442),
    rate!(HE40_LDPC_ONLY, He40, 206500, 212700, 195000, 175500, 103200, 206500, 0x443),
    rate!(HE40_LDPC_ONLY, He40, 309700, 319100, 292500, 263300, 154900, 309700, 0x444),
    rate!(HE40_LDPC_ONLY, He40, 412900, 425500, 390000, 351000, 0, 412900, 0x445),
    rate!(HE40_LDPC_ONLY, He40, 464600, 478600, 438000, 394900, 0, 464600, 0x446),
    rate!(HE40_LDPC_ONLY, He40, 516200, 531800, 487500, 438800, 0, 516200, 0x447),
    rate!(HE40_LDPC_ONLY, He40, 619400, 638200, 585000, 526500, 0, 619400, 0x448),
    rate!(HE40_LDPC_ONLY, He40, 688200, 709100, 650000, 585000, 0, 688200, 0x449),
    rate!(HE40_LDPC_ONLY, He40, 774300, 797700, 731300, 658100, 0, 774300, 0x44a),
    rate!(HE40_LDPC_ONLY, He40, 860300, 886400, 812500, 731300, 0, 860300, 0x44b),
    rate!(HE40_LDPC_ONLY, He40, 929100, 957300, 877500, 789800, 0, 929100, 0x44c),
    rate!(HE40_LDPC_ONLY, He40, 1032400, 1063600, 975000, 877500, 0, 1032400, 0x44d),
    // HE-40, 4 spatial streams (row 566)
    rate!(HE40_LDPC_ONLY, He40, 68800, 70900, 65000, 58500, 34400, 68800, 0x460),
    rate!(HE40_LDPC_ONLY, He40, 137600, 141800, 130000, 117000, 68800, 137600, 0x461),
    rate!(HE40_LDPC_ONLY, He40, 206500, 212700, 195000, 175500, 0, 206500, 0x462),
    rate!(HE40_LDPC_ONLY, He40, 275300, 283600, 260000, 234000, 137600, 275300, 0x463),
    rate!(HE40_LDPC_ONLY, He40, 412900, 425500, 390000, 351000, 206500, 412900, 0x464),
    rate!(HE40_LDPC_ONLY, He40, 550600, 567300, 520000, 468000, 0, 550600, 0x465),
    rate!(HE40_LDPC_ONLY, He40, 619400, 638200, 585000, 526500, 0, 619400, 0x466),
    rate!(HE40_LDPC_ONLY, He40, 688200, 709100, 650000, 585000, 0, 688200, 0x467),
    rate!(HE40_LDPC_ONLY, He40, 825900, 850900, 780000, 702000, 0, 825900, 0x468),
    rate!(HE40_LDPC_ONLY, He40, 917600, 945500, 866700, 780000, 0, 917600, 0x469),
    rate!(HE40_LDPC_ONLY, He40, 1032400, 1063600, 975000, 877500, 0, 1032400, 0x46a),
    rate!(HE40_LDPC_ONLY, He40, 1147100, 1181800, 1083300, 975000, 0, 1147100, 0x46b),
    rate!(HE40_LDPC_ONLY, He40, 1238800, 1276400, 1170000, 1053000, 0, 1238800, 0x46c),
    rate!(HE40_LDPC_ONLY, He40, 1376500, 1418200, 1300000, 1170000, 0, 1376500, 0x46d),
    // HE-40, 5 spatial streams (row 580)
    rate!(HE40_LDPC_ONLY, He40, 86000, 88600, 81300, 73100, 43000, 86000, 0x480),
    rate!(HE40_LDPC_ONLY, He40, 172100, 177300, 162500, 146300, 86000, 172100, 0x481),
    rate!(HE40_LDPC_ONLY, He40, 258100, 265900, 243800, 219400, 0, 258100, 0x482),
    rate!(HE40_LDPC_ONLY, He40, 344100, 354500, 325000, 292500, 172100, 344100, 0x483),
    rate!(HE40_LDPC_ONLY, He40, 516200, 531800, 487500, 438800, 258100, 516200, 0x484),
    rate!(HE40_LDPC_ONLY, He40, 688200, 709100, 650000, 585000, 0, 688200, 0x485),
    rate!(HE40_LDPC_ONLY, He40, 774300, 797700, 731300, 658100, 0, 774300, 0x486),
    rate!(HE40_LDPC_ONLY, He40, 860300, 886400, 812500, 731300, 0, 860300, 0x487),
    rate!(HE40_LDPC_ONLY, He40, 1032400, 1063600, 975000, 877500, 0, 1032400, 0x488),
    rate!(HE40_LDPC_ONLY, He40, 1147100, 1181800, 1083300, 975000, 0, 1147100, 0x489),
    rate!(HE40_LDPC_ONLY, He40, 1290400, 1329500, 1218800, 1096900, 0, 1290400, 0x48a),
    rate!(HE40_LDPC_ONLY, He40, 1433800, 1477300, 1354200, 1218800, 0, 1433800, 0x48b),
    rate!(HE40_LDPC_ONLY, He40, 1548500, 1595500, 1462500, 1316300, 0, 1548500, 0x48c),
    rate!(HE40_LDPC_ONLY, He40, 1720600, 1772700, 1625000, 1462500, 0, 1720600, 0x48d),
    // HE-40, 6 spatial streams (row 594)
    rate!(HE40_LDPC_ONLY, He40, 103200, 106400, 97500, 87800, 51600, 103200, 0x4a0),
    rate!(HE40_LDPC_ONLY, He40, 206500, 212700, 195000, 175500, 103200, 206500, 0x4a1),
    rate!(HE40_LDPC_ONLY, He40, 309700, 319100, 292500, 263300, 0, 309700, 0x4a2),
    rate!(HE40_LDPC_ONLY, He40, 412900, 425500, 390000, 351000, 206500, 412900, 0x4a3),
    rate!(HE40_LDPC_ONLY, He40, 619400, 638200, 585000, 526500, 309700, 619400, 0x4a4),
    rate!(HE40_LDPC_ONLY, He40, 825900, 850900, 780000, 702000, 0, 825900, 0x4a5),
    rate!(HE40_LDPC_ONLY, He40, 929100, 957300, 877500, 789800, 0, 929100, 0x4a6),
    rate!(HE40_LDPC_ONLY, He40, 1032400, 1063600, 975000, 877500, 0, 1032400, 0x4a7),
    rate!(HE40_LDPC_ONLY, He40, 1238800, 1276400, 1170000, 1053000, 0, 1238800, 0x4a8),
    rate!(HE40_LDPC_ONLY, He40, 1376500, 1418200, 1300000, 1170000, 0, 1376500, 0x4a9),
    rate!(HE40_LDPC_ONLY, He40, 1548500, 1595500, 1462500, 1316300, 0, 1548500, 0x4aa),
    rate!(HE40_LDPC_ONLY, He40, 1720600, 1772700, 1625000, 1462500, 0, 1720600, 0x4ab),
    rate!(HE40_LDPC_ONLY, He40, 1858200, 1914500, 1755000, 1579500, 0, 1858200, 0x4ac),
    rate!(HE40_LDPC_ONLY, He40, 2064700, 2127300, 1950000, 1755000, 0, 2064700, 0x4ad),
    // HE-40, 7 spatial streams (row 608)
    rate!(HE40_LDPC_ONLY, He40, 120400, 124100, 113800, 102400, 60200, 120400, 0x4c0),
    rate!(HE40_LDPC_ONLY, He40, 240900, 248200, 227500, 204800, 120400, 240900, 0x4c1),
    rate!(HE40_LDPC_ONLY, He40, 361300, 372300, 341300, 307100, 180600, 361300, 0x4c2),
    rate!(HE40_LDPC_ONLY, He40, 481800, 496400, 455000, 409500, 0, 481800, 0x4c3),
    rate!(HE40_LDPC_ONLY, He40, 722600, 744500, 682500, 614300, 0, 722600, 0x4c4),
    rate!(HE40_LDPC_ONLY, He40, 963500, 992700, 910000, 819000, 0, 963500, 0x4c5),
    rate!(HE40_LDPC_ONLY, He40, 1084000, 1116800, 1023800, 921400, 0, 1084000, 0x4c6),
    rate!(HE40_LDPC_ONLY, He40, 1204400, 1240900, 1137500, 1023800, 0, 1204400, 0x4c7),
    rate!(HE40_LDPC_ONLY, He40, 1445300, 1489100, 1365000, 1228500, 0, 1445300, 0x4c8),
    rate!(HE40_LDPC_ONLY, He40, 1605900, 1654500, 1516700, 1365000, 0, 1605900, 0x4c9),
    rate!(HE40_LDPC_ONLY, He40, 1806600, 1861400, 1706300, 1535600, 0, 1806600, 0x4ca),
    rate!(HE40_LDPC_ONLY, He40, 2007400, 2068200, 1895800, 1706300, 0, 2007400, 0x4cb),
    rate!(HE40_LDPC_ONLY, He40, 2167900, 2233600, 2047500, 1842800, 0, 2167900, 0x4cc),
    rate!(HE40_LDPC_ONLY, He40, 2408800, 2481800, 2275000, 2047500, 0, 2408800, 0x4cd),
    // HE-40, 8 spatial streams (row 622)
    rate!(HE40_LDPC_ONLY, He40, 137600, 141800, 130000, 117000, 68800, 137600, 0x4e0),
    rate!(HE40_LDPC_ONLY, He40, 275300, 283600, 260000, 234000, 137600, 275300, 0x4e1),
    rate!(HE40_LDPC_ONLY, He40, 412900, 425500, 390000, 351000, 206500, 412900, 0x4e2),
    rate!(HE40_LDPC_ONLY, He40, 550600, 567300, 520000, 468000, 0, 550600, 0x4e3),
    rate!(HE40_LDPC_ONLY, He40, 825900, 850900, 780000, 702000, 0, 825900, 0x4e4),
    rate!(HE40_LDPC_ONLY, He40, 1101200, 1134500, 1040000, 936000, 0, 1101200, 0x4e5),
    rate!(HE40_LDPC_ONLY, He40, 1238800, 1276400, 1170000, 1053000, 0, 1238800, 0x4e6),
    rate!(HE40_LDPC_ONLY, He40, 1376500, 1418200, 1300000, 1170000, 0, 1376500, 0x4e7),
    rate!(HE40_LDPC_ONLY, He40, 1651800, 1701800, 1560000, 1404000, 0, 1651800, 0x4e8),
    rate!(HE40_LDPC_ONLY, He40, 1835300, 1890900, 1733300, 1560000, 0, 1835300, 0x4e9),
    rate!(HE40_LDPC_ONLY, He40, 2064700, 2127300, 1950000, 1755000, 0, 2064700, 0x4ea),
    rate!(HE40_LDPC_ONLY, He40, 2294100, 2363600, 2166700, 1950000, 0, 2294100, 0x4eb),
    rate!(HE40_LDPC_ONLY, He40, 2477600, 2552700, 2340000, 2106000, 0, 2477600, 0x4ec),
    rate!(HE40_LDPC_ONLY, He40, 2752900, 2836400, 2600000, 2340000, 0, 2752900, 0x4ed),

    // HE-80, 1 spatial stream (row 636)
    rate!(HE80_LDPC_ONLY, He80, 36000, 37100, 34000, 30600, 18000, 36000, 0x400),
    rate!(HE80_LDPC_ONLY, He80, 72100, 74200, 68100, 61300, 36000, 72100, 0x401),
    rate!(HE80_LDPC_ONLY, He80, 108100, 111400, 102100, 91900, 0, 108100, 0x402),
    rate!(HE80_LDPC_ONLY, He80, 144100, 148500, 136100, 122500, 72100, 144100, 0x403),
    rate!(HE80_LDPC_ONLY, He80, 216200, 222700, 204200, 183800, 108100, 216200, 0x404),
    rate!(HE80_LDPC_ONLY, He80, 288200, 297000, 272200, 245000, 0, 288200, 0x405),
    rate!(HE80_LDPC_ONLY, He80, 324300, 334100, 306300, 275600, 0, 324300, 0x406),
    rate!(HE80_LDPC_ONLY, He80, 360300, 371200, 340300, 306300, 0, 360300, 0x407),
    rate!(HE80_LDPC_ONLY, He80, 432400, 445500, 408300, 367500, 0, 432400, 0x408),
    rate!(HE80_LDPC_ONLY, He80, 480400, 494900, 453700, 408300, 0, 480400, 0x409),
    rate!(HE80_LDPC_ONLY, He80, 540400, 556800, 510400, 459400, 0, 540400, 0x40a),
    rate!(HE80_LDPC_ONLY, He80, 600500, 618700, 567100, 510400, 0, 600500, 0x40b),
    rate!(HE80_LDPC_ONLY, He80, 648500, 668200, 612500, 551300, 0, 648500, 0x40c),
    rate!(HE80_LDPC_ONLY, He80, 720600, 742400, 680600, 612500, 0, 720600, 0x40d),
    // HE-80, 2 spatial streams (row 650)
    rate!(HE80_LDPC_ONLY, He80, 72100, 74200, 68100, 61300, 36000, 72100, 0x420),
    rate!(HE80_LDPC_ONLY, He80, 144100, 148500, 136100, 122500, 72100, 144100, 0x421),
    rate!(HE80_LDPC_ONLY, He80, 216200, 222700, 204200, 183800, 0, 216200, 0x422),
    rate!(HE80_LDPC_ONLY, He80, 288200, 297000, 272200, 245000, 144100, 288200, 0x423),
    rate!(HE80_LDPC_ONLY, He80, 432400, 445500, 408300, 367500, 216200, 432400, 0x424),
    rate!(HE80_LDPC_ONLY, He80, 576500, 593900, 544400, 490000, 0, 576500, 0x425),
    rate!(HE80_LDPC_ONLY, He80, 648500, 668200, 612500, 551300, 0, 648500, 0x426),
    rate!(HE80_LDPC_ONLY, He80, 720600, 742400, 680600, 612500, 0, 720600, 0x427),
    rate!(HE80_LDPC_ONLY, He80, 864700, 890900, 816700, 735000, 0, 864700, 0x428),
    rate!(HE80_LDPC_ONLY, He80, 960800, 989900, 907400, 816700, 0, 960800, 0x429),
    rate!(HE80_LDPC_ONLY, He80, 1080900, 1113600, 1020800, 918800, 0, 1080900, 0x42a),
    rate!(HE80_LDPC_ONLY, He80, 1201000, 1237400, 1134300, 1020800, 0, 1201000, 0x42b),
    rate!(HE80_LDPC_ONLY, He80, 1297100, 1336400, 1225000, 1102500, 0, 1297100, 0x42c),
    rate!(HE80_LDPC_ONLY, He80, 1441200, 1484800, 1361100, 1225000, 0, 1441200, 0x42d),
    // HE-80, 3 spatial streams (row 664)
    rate!(HE80_LDPC_ONLY, He80, 108100, 111400, 102100, 91900, 54000, 108100, 0x440),
    rate!(HE80_LDPC_ONLY, He80, 216200, 222700, 204200, 183800, 108100, 216200, 0x441),
    rate!(HE80_LDPC_ONLY, He80, 324300, 334100, 306300, 275600, 0, 324300, 0x442),
    rate!(HE80_LDPC_ONLY, He80, 432400, 445500, 408300, 367500, 0, 432400, 0x443),
    rate!(HE80_LDPC_ONLY, He80, 648500, 668200, 612500, 551300, 0, 648500, 0x444),
    rate!(HE80_LDPC_ONLY, He80, 864700, 890900, 816700, 735000, 0, 864700, 0x445),
    rate!(HE80_LDPC_ONLY, He80, 972800, 1002300, 918800, 826900, 0, 972800, 0x446),
    rate!(HE80_LDPC_ONLY, He80, 1080900, 1113600, 1020800, 918800, 0, 1080900, 0x447),
    rate!(HE80_LDPC_ONLY, He80, 1297100, 1336400, 1225000, 1102500, 0, 1297100, 0x448),
    rate!(HE80_LDPC_ONLY, He80, 1441200, 1484800, 1361100, 1225000, 0, 1441200, 0x449),
    rate!(HE80_LDPC_ONLY, He80, 1621300, 1670500, 1531300, 1378100, 0, 1621300, 0x44a),
    rate!(HE80_LDPC_ONLY, He80, 1801500, 1856100, 1701400, 1531300, 0, 1801500, 0x44b),
    rate!(HE80_LDPC_ONLY, He80, 1945600, 2004500, 1837500, 1653800, 0, 1945600, 0x44c),
    rate!(HE80_LDPC_ONLY, He80, 2161800, 2227300, 2041700, 1837500, 0, 2161800, 0x44d),
    // HE-80, 4 spatial streams (row 678)
    rate!(HE80_LDPC_ONLY, He80, 144100, 148500, 136100, 122500, 72100, 144100, 0x460),
    rate!(HE80_LDPC_ONLY, He80, 288200, 297000, 272200, 245000, 144100, 288200, 0x461),
    rate!(HE80_LDPC_ONLY, He80, 432400, 445500, 408300, 367500, 0, 432400, 0x462),
    rate!(HE80_LDPC_ONLY, He80, 576500, 593900, 544400, 490000, 288200, 576500, 0x463),
    rate!(HE80_LDPC_ONLY, He80, 864700, 890900, 816700, 735000, 432400, 864700, 0x464),
    rate!(HE80_LDPC_ONLY, He80, 1152900, 1187900, 1088900, 980000, 0, 1152900, 0x465),
    rate!(HE80_LDPC_ONLY, He80, 1297100, 1336400, 1225000, 1102500, 0, 1297100, 0x466),
    rate!(HE80_LDPC_ONLY, He80, 1441200, 1484800, 1361100, 1225000, 0, 1441200, 0x467),
    rate!(HE80_LDPC_ONLY, He80, 1729400, 1781800, 1633300, 1470000, 0, 1729400, 0x468),
    rate!(HE80_LDPC_ONLY, He80, 1921600, 1979800, 1814800, 1633300, 0, 1921600, 0x469),
    rate!(HE80_LDPC_ONLY, He80, 2161800, 2227300, 2041700, 1837500, 0, 2161800, 0x46a),
    rate!(HE80_LDPC_ONLY, He80, 2401900, 2474700, 2268500, 2041700, 0, 2401900, 0x46b),
    rate!(HE80_LDPC_ONLY, He80, 2594100, 2672700, 2450000, 2205000, 0, 2594100, 0x46c),
    rate!(HE80_LDPC_ONLY, He80, 2882400, 2969700, 2722200, 2450000, 0, 2882400, 0x46d),
    // HE-80, 5 spatial streams (row 692)
    rate!(HE80_LDPC_ONLY, He80, 180100, 185600, 170100, 153100, 90100, 180100, 0x480),
    rate!(HE80_LDPC_ONLY, He80, 360300, 371200, 340300, 306300, 180100, 360300, 0x481),
    rate!(HE80_LDPC_ONLY, He80, 540400, 556800, 510400, 459400, 0, 540400, 0x482),
    rate!(HE80_LDPC_ONLY, He80, 720600, 742400, 680600, 612500, 0, 720600, 0x483),
    rate!(HE80_LDPC_ONLY, He80, 1080900, 1113600, 1020800, 918800, 0, 1080900, 0x484),
    rate!(HE80_LDPC_ONLY, He80, 1441200, 1484800, 1361100, 1225000, 0, 1441200, 0x485),
    rate!(HE80_LDPC_ONLY, He80, 1621300, 1670500, 1531300, 1378100, 0, 1621300, 0x486),
    rate!(HE80_LDPC_ONLY, He80, 1801500, 1856100, 1701400, 1531300, 0, 1801500, 0x487),
    rate!(HE80_LDPC_ONLY, He80, 2161800, 2227300, 2041700, 1837500, 0, 2161800, 0x488),
    rate!(HE80_LDPC_ONLY, He80, 2402000, 2474700, 2268500, 2041700, 0, 2402000, 0x489),
    rate!(HE80_LDPC_ONLY, He80, 2702200, 2784100, 2552100, 2296900, 0, 2702200, 0x48a),
    rate!(HE80_LDPC_ONLY, He80, 3002500, 3093400, 2835600, 2552100, 0, 3002500, 0x48b),
    rate!(HE80_LDPC_ONLY, He80, 3242600, 3340900, 3062500, 2756300, 0, 3242600, 0x48c),
    rate!(HE80_LDPC_ONLY, He80, 3602900, 3712100, 3402800, 3062500, 0, 3602900, 0x48d),
    // HE-80, 6 spatial streams (row 706)
    rate!(HE80_LDPC_ONLY, He80, 216200, 222700, 204200, 183800, 108100, 216200, 0x4a0),
    rate!(HE80_LDPC_ONLY, He80, 432400, 445500, 408300, 367500, 216200, 432400, 0x4a1),
    rate!(HE80_LDPC_ONLY, He80, 648500, 668200, 612500, 551300, 0, 648500, 0x4a2),
    rate!(HE80_LDPC_ONLY, He80, 864700, 890900, 816700, 735000, 432400, 864700, 0x4a3),
    rate!(HE80_LDPC_ONLY, He80, 1297100, 1336400, 1225000, 1102500, 648500, 1297100, 0x4a4),
    rate!(HE80_LDPC_ONLY, He80, 1729400, 1781800, 1633300, 1470000, 0, 1729400, 0x4a5),
    rate!(HE80_LDPC_ONLY, He80, 1945600, 2004500, 1837500, 1653800, 0, 1945600, 0x4a6),
    rate!(HE80_LDPC_ONLY, He80, 2161800, 2227300, 2041700, 1837500, 0, 2161800, 0x4a7),
    rate!(HE80_LDPC_ONLY, He80, 2594100, 2672700, 2450000, 2205000, 0, 2594100, 0x4a8),
    rate!(HE80_LDPC_ONLY, He80, 2882400, 2969700, 2722200, 2450000, 0, 2882400, 0x4a9),
    rate!(HE80_LDPC_ONLY, He80, 3242600, 3340900, 3062500, 2756300, 0, 3242600, 0x4aa),
    rate!(HE80_LDPC_ONLY, He80, 3602900, 3712100, 3402800, 3062500, 0, 3602900, 0x4ab),
    rate!(HE80_LDPC_ONLY, He80, 3891200, 4009100, 3675000, 3307500, 0, 3891200, 0x4ac),
    rate!(HE80_LDPC_ONLY, He80, 4323500, 4454500, 4083300, 3675000, 0, 4323500, 0x4ad),
    // HE-80, 7 spatial streams (row 720)
    rate!(HE80_LDPC_ONLY, He80, 252200, 259800, 238200, 214400, 129900, 252200, 0x4c0),
    rate!(HE80_LDPC_ONLY, He80, 504400, 519700, 476400, 428800, 252200, 504400, 0x4c1),
    rate!(HE80_LDPC_ONLY, He80, 756600, 779500, 714600, 643100, 0, 756600, 0x4c2),
    rate!(HE80_LDPC_ONLY, He80, 1008800, 1039400, 952800, 857500, 504400, 1008800, 0x4c3),
    rate!(HE80_LDPC_ONLY, He80, 1513200, 1559100, 1429200, 1286300, 756600, 1513200, 0x4c4),
    rate!(HE80_LDPC_ONLY, He80, 2017600, 2078800, 1905600, 1715000, 0, 2017600, 0x4c5),
    rate!(HE80_LDPC_ONLY, He80, 2269900, 2338600, 2143800, 1929400, 0, 2269900, 0x4c6),
    rate!(HE80_LDPC_ONLY, He80, 2522100, 2598500, 2381900, 2143800, 0, 2522100, 0x4c7),
    rate!(HE80_LDPC_ONLY, He80, 3026500, 3118200, 2858300, 2572500, 0, 3026500, 0x4c8),
    rate!(HE80_LDPC_ONLY, He80, 3362700, 3464600, 3175900, 2858300, 0, 3362700, 0x4c9),
    rate!(HE80_LDPC_ONLY, He80, 3783100, 3897700, 3572900, 3215600, 0, 3783100, 0x4ca),
    rate!(HE80_LDPC_ONLY, He80, 4203400, 4330800, 3969900, 3572900, 0, 4203400, 0x4cb),
    rate!(HE80_LDPC_ONLY, He80, 4539700, 4677300, 4287500, 3858800, 0, 4539700, 0x4cc),
    rate!(HE80_LDPC_ONLY, He80, 5044100, 5197000, 4763900, 4287500, 0, 5044100, 0x4cd),
    // HE-80, 8 spatial streams (row 734)
    rate!(HE80_LDPC_ONLY, He80, 288200, 297000, 272200, 245000, 144100, 288200, 0x4e0),
    rate!(HE80_LDPC_ONLY, He80, 576500, 593900, 544400, 490000, 288200, 576500, 0x4e1),
    rate!(HE80_LDPC_ONLY, He80, 864700, 890900, 816700, 735000, 0, 864700, 0x4e2),
    rate!(HE80_LDPC_ONLY, He80, 1152900, 1187900, 1088900, 980000, 576500, 1152900, 0x4e3),
    rate!(HE80_LDPC_ONLY, He80, 1729400, 1781800, 1633300, 1470000, 864700, 1729400, 0x4e4),
    rate!(HE80_LDPC_ONLY, He80, 2305900, 2375800, 2177800, 1960000, 0, 2305900, 0x4e5),
    rate!(HE80_LDPC_ONLY, He80, 2594100, 2672700, 2450000, 2205000, 0, 2594100, 0x4e6),
    rate!(HE80_LDPC_ONLY, He80, 2882400, 2969700, 2722200, 2450000, 0, 2882400, 0x4e7),
    rate!(HE80_LDPC_ONLY, He80, 3458800, 3563600, 3266700, 2940000, 0, 3458800, 0x4e8),
    rate!(HE80_LDPC_ONLY, He80, 3843100, 3959600, 3629600, 3266700, 0, 3843100, 0x4e9),
    rate!(HE80_LDPC_ONLY, He80, 4323500, 4454500, 4083300, 3675000, 0, 4323500, 0x4ea),
    rate!(HE80_LDPC_ONLY, He80, 4803900, 4949500, 4537000, 4083300, 0, 4803900, 0x4eb),
    rate!(HE80_LDPC_ONLY, He80, 5188200, 5345500, 4900000, 4410000, 0, 5188200, 0x4ec),
    rate!(HE80_LDPC_ONLY, He80, 5764700, 5939400, 5444400, 4900000, 0, 5764700, 0x4ed),

    // HE-160, 1 spatial stream (row 748)
    rate!(HE160_LDPC_ONLY, He160, 72100, 74200, 68100, 61300, 36000, 72100, 0x400),
    rate!(HE160_LDPC_ONLY, He160, 144100, 148500, 136100, 122500, 72100, 144100, 0x401),
    rate!(HE160_LDPC_ONLY, He160, 216200, 222700, 204200, 183800, 0, 216200, 0x402),
    rate!(HE160_LDPC_ONLY, He160, 288200, 297000, 272200, 245000, 144100, 288200, 0x403),
    rate!(HE160_LDPC_ONLY, He160, 432400, 445500, 408300, 367500, 216200, 432400, 0x404),
    rate!(HE160_LDPC_ONLY, He160, 576500, 593900, 544400, 490000, 0, 576500, 0x405),
    rate!(HE160_LDPC_ONLY, He160, 648500, 668200, 612500, 551300, 0, 648500, 0x406),
    rate!(HE160_LDPC_ONLY, He160, 720600, 742400, 680600, 612500, 0, 720600, 0x407),
    rate!(HE160_LDPC_ONLY, He160, 864700, 890900, 816700, 735000, 0, 864700, 0x408),
    rate!(HE160_LDPC_ONLY, He160, 960800, 989900, 907400, 816700, 0, 960800, 0x409),
    rate!(HE160_LDPC_ONLY, He160, 1080900, 1113600, 1020800, 918800, 0, 1080900, 0x40a),
    rate!(HE160_LDPC_ONLY, He160, 1201000, 1237400, 1134300, 1020800, 0, 1201000, 0x40b),
    rate!(HE160_LDPC_ONLY, He160, 1297100, 1336400, 1225000, 1102500, 0, 1297100, 0x40c),
    rate!(HE160_LDPC_ONLY, He160, 1441200, 1484800, 1361100, 1225000, 0, 1441200, 0x40d),
    // HE-160, 2 spatial streams (row 762)
    rate!(HE160_LDPC_ONLY, He160, 144100, 148500, 136100, 122500, 72100, 144100, 0x420),
    rate!(HE160_LDPC_ONLY, He160, 288200, 297000, 272200, 245000, 144100, 288200, 0x421),
    rate!(HE160_LDPC_ONLY, He160, 432400, 445500, 408300, 367500, 0, 432400, 0x422),
    rate!(HE160_LDPC_ONLY, He160, 576500, 593900, 544400, 490000, 288200, 576500, 0x423),
    rate!(HE160_LDPC_ONLY, He160, 864700, 890900, 816700, 735000, 432400, 864700, 0x424),
    rate!(HE160_LDPC_ONLY, He160, 1152900, 1187900, 1088900, 980000, 0, 1152900, 0x425),
    rate!(HE160_LDPC_ONLY, He160, 1297100, 1336400, 1225000, 1102500, 0, 1297100, 0x426),
    rate!(HE160_LDPC_ONLY, He160, 1441200, 1484800, 1361100, 1225000, 0, 1441200, 0x427),
    rate!(HE160_LDPC_ONLY, He160, 1729400, 1781800, 1633300, 1470000, 0, 1729400, 0x428),
    rate!(HE160_LDPC_ONLY, He160, 1921600, 1979800, 1814800, 1633300, 0, 1921600, 0x429),
    rate!(HE160_LDPC_ONLY, He160, 2161800, 2227300, 2041700, 1837500, 0, 2161800, 0x42a),
    rate!(HE160_LDPC_ONLY, He160, 2401900, 2474700, 2268500, 2041700, 0, 2401900, 0x42b),
    rate!(HE160_LDPC_ONLY, He160, 2594100, 2672700, 2450000, 2205000, 0, 2594100, 0x42c),
    rate!(HE160_LDPC_ONLY, He160, 2882400, 2969700, 2722200, 2450000, 0, 2882400, 0x42d),
    // HE-160, 3 spatial streams (row 776)
    rate!(HE160_LDPC_ONLY, He160, 216200, 222700, 204200, 183800, 108100, 216200, 0x440),
    rate!(HE160_LDPC_ONLY, He160, 432400, 445500, 408300, 367500, 216200, 432400, 0x441),
    rate!(HE160_LDPC_ONLY, He160, 648500, 668200, 612500, 551300, 0, 648500, 0x442),
    rate!(HE160_LDPC_ONLY, He160, 864700, 890900, 816700, 735000, 432400, 864700, 0x443),
    rate!(HE160_LDPC_ONLY, He160, 1297100, 1336400, 1225000, 1102500, 648500, 1297100, 0x444),
    rate!(HE160_LDPC_ONLY, He160, 1729400, 1781800, 1633300, 1470000, 0, 1729400, 0x445),
    rate!(HE160_LDPC_ONLY, He160, 1945600, 2004500, 1837500, 1653800, 0, 1945600, 0x446),
    rate!(HE160_LDPC_ONLY, He160, 2161800, 2227300, 2041700, 1837500, 0, 2161800, 0x447),
    rate!(HE160_LDPC_ONLY, He160, 2594100, 2672700, 2450000, 2205000, 0, 2594100, 0x448),
    rate!(HE160_LDPC_ONLY, He160, 2882400, 2969700, 2722200, 2450000, 0, 2882400, 0x449),
    rate!(HE160_LDPC_ONLY, He160, 3242600, 3340900, 3062500, 2756300, 0, 3242600, 0x44a),
    rate!(HE160_LDPC_ONLY, He160, 3602900, 3712100, 3402800, 3062500, 0, 3602900, 0x44b),
    rate!(HE160_LDPC_ONLY, He160, 3891200, 4009100, 3675000, 3307500, 0, 3891200, 0x44c),
    rate!(HE160_LDPC_ONLY, He160, 4323500, 4454500, 4083300, 3675000, 0, 4323500, 0x44d),
    // HE-160, 4 spatial streams (row 790)
    rate!(HE160_LDPC_ONLY, He160, 288200, 297000, 272200, 245000, 144100, 288200, 0x460),
    rate!(HE160_LDPC_ONLY, He160, 576500, 593900, 544400, 490000, 288200, 576500, 0x461),
    rate!(HE160_LDPC_ONLY, He160, 864700, 890900, 816700, 735000, 0, 864700, 0x462),
    rate!(HE160_LDPC_ONLY, He160, 1152900, 1187900, 1088900, 980000, 576500, 1152900, 0x463),
    rate!(HE160_LDPC_ONLY, He160, 1729400, 1781800, 1633300, 1470000, 864700, 1729400, 0x464),
    rate!(HE160_LDPC_ONLY, He160, 2305900, 2375800, 2177800, 1960000, 0, 2305900, 0x465),
    rate!(HE160_LDPC_ONLY, He160, 2594100, 2672700, 2450000, 2205000, 0, 2594100, 0x466),
    rate!(HE160_LDPC_ONLY, He160, 2882400, 2969700, 2722200, 2450000, 0, 2882400, 0x467),
    rate!(HE160_LDPC_ONLY, He160, 3458800, 3563600, 3266700, 2940000, 0, 3458800, 0x468),
    rate!(HE160_LDPC_ONLY, He160, 3843100, 3959600, 3629600, 3266700, 0, 3843100, 0x469),
    rate!(HE160_LDPC_ONLY, He160, 4323500, 4454500, 4083300, 3675000, 0, 4323500, 0x46a),
    rate!(HE160_LDPC_ONLY, He160, 4803900, 4949500, 4537000, 4083300, 0, 4803900, 0x46b),
    rate!(HE160_LDPC_ONLY, He160, 5188200, 5345500, 4900000, 4410000, 0, 5188200, 0x46c),
    rate!(HE160_LDPC_ONLY, He160, 5764700, 5939400, 5444400, 4900000, 0, 5764700, 0x46d),
];

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::phy::{ChannelBandwidth, Preamble},
    };

    fn band_of(row: usize) -> Modulation {
        *Modulation::ALL
            .iter()
            .rev()
            .find(|modulation| modulation.table_index() <= row)
            .expect("every row belongs to a band")
    }

    #[test]
    fn bands_are_contiguous() {
        let mut next = 0;
        for modulation in Modulation::ALL.iter() {
            assert_eq!(modulation.table_index(), next, "{:?} starts at the wrong row", modulation);
            next += modulation.band_len();
        }
        assert_eq!(next, RATE_TABLE_SIZE);
    }

    #[test]
    fn row_modulation_matches_band() {
        for (row, entry) in RATE_TABLE.iter().enumerate() {
            assert_eq!(entry.modulation, band_of(row), "row {}", row);
        }
    }

    #[test]
    fn row_rate_code_matches_position() {
        for (row, entry) in RATE_TABLE.iter().enumerate() {
            let modulation = entry.modulation;
            let offset = row - modulation.table_index();
            let nss = (offset / modulation.mcs_per_nss() + 1) as u8;
            let mcs = (offset % modulation.mcs_per_nss()) as u8;
            let expected = RateCode::new(modulation.preamble(), nss, mcs)
                .expect("every row position has a rate code");
            assert_eq!(entry.rate_code, expected, "row {}", row);
        }
    }

    #[test]
    fn user_rate_matches_rate() {
        for entry in RATE_TABLE.iter() {
            assert_eq!(entry.user_rate_kbps, entry.rate_kbps);
        }
    }

    #[test]
    fn only_he_rows_have_he_figures() {
        for (row, entry) in RATE_TABLE.iter().enumerate() {
            let is_he = entry.modulation.preamble() == Preamble::He;
            assert_eq!(entry.rate_kbps_dgi != 0, is_he, "row {}", row);
            assert_eq!(entry.rate_kbps_qgi != 0, is_he, "row {}", row);
        }
    }

    #[test]
    fn short_gi_is_faster() {
        // The VHT-40 4SS MCS 4 short GI figure ships below its normal GI figure.
        let quirk = VHT40_INDEX + 3 * NUM_VHT_MCS + 4;
        assert_eq!(RATE_TABLE[quirk].rate_kbps_sgi, 260000);
        for (row, entry) in RATE_TABLE.iter().enumerate().filter(|(row, _)| *row != quirk) {
            assert!(entry.rate_kbps_sgi >= entry.rate_kbps, "row {}", row);
            if entry.rate_kbps_dgi != 0 {
                assert!(entry.rate_kbps_dgi < entry.rate_kbps);
                assert!(entry.rate_kbps_qgi < entry.rate_kbps_dgi);
            }
        }
    }

    #[test]
    fn legacy_rows_have_no_short_gi_variant() {
        for entry in RATE_TABLE[CCK_INDEX..=OFDM_END_INDEX].iter() {
            assert_eq!(entry.rate_kbps_sgi, entry.rate_kbps);
        }
    }

    #[test]
    fn only_invalid_row_is_vht80_three_streams_mcs6() {
        let invalid: Vec<usize> = RATE_TABLE
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_valid())
            .map(|(row, _)| row)
            .collect();
        assert_eq!(invalid, vec![VHT80_INDEX + 2 * NUM_VHT_MCS + 6]);
        assert_eq!(*RATE_TABLE[invalid[0]].rate_code, 0x346);
    }

    #[test]
    fn valid_modes_match_band() {
        for entry in RATE_TABLE.iter().filter(|entry| entry.is_valid()) {
            let band_modes = match entry.modulation {
                Modulation::Cck => PhyModes::CCK,
                Modulation::Ofdm => PhyModes::OFDM,
                Modulation::Ht20 => PhyModes::HT20,
                Modulation::Ht40 => PhyModes::HT40,
                Modulation::Vht20 => PhyModes::VHT20,
                Modulation::Vht40 => PhyModes::VHT40,
                Modulation::Vht80 => PhyModes::VHT80,
                Modulation::Vht160 => PhyModes::VHT160,
                Modulation::He20 => PhyModes::HE20,
                Modulation::He40 => PhyModes::HE40,
                Modulation::He80 => PhyModes::HE80,
                Modulation::He160 => PhyModes::HE160,
            };
            assert_eq!(entry.valid_modes - PhyModes::INVALID_BCC, band_modes);
        }
    }

    #[test]
    fn ldpc_only_rates() {
        // HT never needs LDPC; HE above 20 MHz always does.
        assert!(RATE_TABLE[HT20_INDEX..VHT20_INDEX].iter().all(|entry| !entry.requires_ldpc()));
        assert!(RATE_TABLE[HE40_INDEX..RATE_TABLE_SIZE].iter().all(|entry| entry.requires_ldpc()));
        // VHT MCS 10 and 11 are LDPC only.
        assert!(RATE_TABLE[VHT20_INDEX + 10].requires_ldpc());
        assert!(RATE_TABLE[VHT20_INDEX + 11].requires_ldpc());
        assert!(!RATE_TABLE[VHT20_INDEX + 8].requires_ldpc());
    }

    #[test]
    fn kbps_for_gi_selects_column() {
        let entry = &RATE_TABLE[HE20_INDEX];
        assert_eq!(entry.kbps_for_gi(GuardInterval::Normal), 8600);
        assert_eq!(entry.kbps_for_gi(GuardInterval::Short), 8900);
        assert_eq!(entry.kbps_for_gi(GuardInterval::Double), 8100);
        assert_eq!(entry.kbps_for_gi(GuardInterval::Quadruple), 7300);
        assert_eq!(entry.rate_kbps_dcm, 4300);
    }

    #[test]
    fn highest_rate_is_he160_four_streams_mcs13() {
        // Ties go to the last row, which is HE-160.
        let fastest =
            RATE_TABLE.iter().max_by_key(|entry| entry.rate_kbps).expect("table is empty");
        assert_eq!(fastest.modulation, Modulation::He160);
        assert_eq!(fastest.modulation.bandwidth(), ChannelBandwidth::Cbw160);
        assert_eq!(fastest.rate_kbps, 5764700);
        assert_eq!(*fastest.rate_code, 0x46d);
    }
}
